//! Visibility state
//!
//! Every element carries a visibility flag. It is presentation metadata only: rendering and
//! tree structure ignore it. Elements start out [Visibility::Visible] and may switch freely.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    /// Human-readable description of the state
    pub fn describe(&self) -> &'static str {
        match self {
            Visibility::Visible => "Element is visible.",
            Visibility::Hidden => "Element is hidden.",
        }
    }

    /// Report the state through the log and hand back the description
    pub fn handle(&self) -> &'static str {
        let description = self.describe();
        tracing::info!(target: "markup_tree::state", state = %self, "{}", description);
        description
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Visible => write!(f, "visible"),
            Visibility::Hidden => write!(f, "hidden"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_visible() {
        assert_eq!(Visibility::default(), Visibility::Visible);
        assert_eq!(Visibility::default().describe(), "Element is visible.");
    }

    #[test]
    fn test_handle_returns_description() {
        assert_eq!(Visibility::Hidden.handle(), "Element is hidden.");
        assert!(!Visibility::Hidden.is_visible());
    }
}
