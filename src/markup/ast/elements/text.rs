//! Text element
//!
//! A tag wrapping a run of text, rendered as `<tag>content</tag>`. Content is embedded
//! verbatim unless the renderer is asked to escape it.

use super::super::error::ElementResult;
use super::super::state::Visibility;
use super::super::traits::{truncate_label, AstNode};
use super::validate_tag;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    tag: String,
    content: String,
    state: Visibility,
}

impl Text {
    pub fn new(tag: impl Into<String>, content: impl Into<String>) -> ElementResult<Self> {
        Ok(Self {
            tag: validate_tag(tag.into())?,
            content: content.into(),
            state: Visibility::default(),
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn set_state(&mut self, state: Visibility) {
        self.state = state;
    }
}

impl AstNode for Text {
    fn node_type(&self) -> &'static str {
        "Text"
    }

    fn display_label(&self) -> String {
        format!("<{}> {}", self.tag, truncate_label(&self.content, 50))
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text('{}', '{}')", self.tag, self.content)
    }
}
