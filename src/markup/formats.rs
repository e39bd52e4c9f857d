//! Output formats
//!
//!     Three serializers turn an element tree into text:
//!
//!         - html: the markup itself. See [html](html).
//!         - json: the [snapshot](crate::markup::ast::snapshot) as pretty-printed JSON. See [json](json).
//!         - treeviz: an indented outline, one element per line. See [treeviz](treeviz).
//!
//!     [Format] picks a serializer by name; [RenderOptions] carries the knobs they share.

pub mod html;
pub mod json;
pub mod treeviz;

pub use html::{escape_markup, render, render_with};

use crate::markup::ast::{Element, ElementError, ElementResult};
use markup_config::{OutputFormat, RenderConfig};

/// Settings shared by all serializers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Escape `&`, `<`, `>`, `"` and `'` in text content and image sources.
    /// Off by default: content is embedded verbatim.
    pub escape_special_chars: bool,
}

impl RenderOptions {
    pub fn escaped() -> Self {
        Self {
            escape_special_chars: true,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            escape_special_chars: config.escape_special_chars,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Json,
    Treeviz,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Html, Format::Json, Format::Treeviz];

    pub fn from_name(name: &str) -> ElementResult<Self> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| ElementError::UnknownFormat(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Json => "json",
            Format::Treeviz => "treeviz",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Format::Html => "Markup for the element tree",
            Format::Json => "Element snapshot as pretty-printed JSON",
            Format::Treeviz => "Indented outline, one element per line",
        }
    }

    pub fn serialize(&self, element: &Element, options: &RenderOptions) -> ElementResult<String> {
        match self {
            Format::Html => Ok(html::render_with(element, options)),
            Format::Json => json::serialize(element),
            Format::Treeviz => Ok(treeviz::serialize(element)),
        }
    }
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => Format::Html,
            OutputFormat::Json => Format::Json,
            OutputFormat::Treeviz => Format::Treeviz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Format::from_name("treeviz").unwrap(), Format::Treeviz);
        assert_eq!(
            Format::from_name("pdf").unwrap_err(),
            ElementError::UnknownFormat("pdf".to_string())
        );
    }

    #[test]
    fn test_names_match_config_formats() {
        for format in [OutputFormat::Html, OutputFormat::Json, OutputFormat::Treeviz] {
            assert_eq!(Format::from(format).name(), format.as_str());
        }
    }
}
