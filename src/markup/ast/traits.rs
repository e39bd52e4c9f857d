//! Common interface for uniform node access
//!
//! Serializers and debugging output work through [AstNode] instead of matching on every
//! element kind themselves.

/// Common interface shared by all element kinds
pub trait AstNode {
    /// Short name of the node kind ("Text", "Image", "Container")
    fn node_type(&self) -> &'static str;

    /// One-line human readable description, used by tree views
    fn display_label(&self) -> String;
}

/// Shorten a label to `max` characters, marking the cut with an ellipsis
pub(crate) fn truncate_label(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}…", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}
