//! Error types for element construction and serialization

use std::fmt;

/// Errors raised while building or serializing an element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// A constructor argument is unusable (e.g., an empty tag name)
    InvalidArgument { field: &'static str, reason: String },
    /// The requested change would break the tree shape (e.g., children on a leaf)
    InvalidStructure { parent: String, reason: String },
    /// No serializer is registered under this name
    UnknownFormat(String),
    /// A serializer failed to produce output
    Serialization(String),
}

impl ElementError {
    pub(crate) fn empty_tag() -> Self {
        ElementError::InvalidArgument {
            field: "tag",
            reason: "tag name must not be empty".to_string(),
        }
    }
}

impl fmt::Display for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementError::InvalidArgument { field, reason } => {
                write!(f, "Invalid argument `{}`: {}", field, reason)
            }
            ElementError::InvalidStructure { parent, reason } => {
                write!(f, "Invalid structure under <{}>: {}", parent, reason)
            }
            ElementError::UnknownFormat(name) => write!(f, "Unknown format: {}", name),
            ElementError::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for ElementError {}

/// Result alias for element operations
pub type ElementResult<T> = Result<T, ElementError>;
