//! Settings for markup-tree renderers.
//!
//! The built-in values live in `defaults/markup.default.toml` and are compiled in.
//! [`Loader`] stacks further sources over them: a `markup.toml` found in a working
//! directory, an explicit file, then single-key overrides. A file only needs the keys
//! it changes.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/markup.default.toml");

/// Top-level configuration consumed by markup-tree applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkupConfig {
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

/// Knobs for markup serialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub escape_special_chars: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Html,
    Json,
    Treeviz,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Treeviz => "treeviz",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// File name picked up from a directory by [`Loader::with_local_file`].
pub const LOCAL_CONFIG_FILE: &str = "markup.toml";

/// Stacks configuration sources; later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start from the embedded defaults.
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file, skipping it when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Layer `markup.toml` from `dir` when one is there.
    pub fn with_local_file(self, dir: impl AsRef<Path>) -> Self {
        self.with_optional_file(dir.as_ref().join(LOCAL_CONFIG_FILE))
    }

    /// Override one dotted key, e.g. `render.escape_special_chars`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<MarkupConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MarkupConfig, ConfigError> {
    Loader::new().build()
}
