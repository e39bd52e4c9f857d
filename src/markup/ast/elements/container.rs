//! Container element
//!
//! A container owns an ordered list of children and renders as its tag wrapped around the
//! concatenated markup of those children. Children may be any element kind, including further
//! containers.
//!
//! The child list only grows: [Container::add_child] appends, and nothing removes or reorders.
//! Because children are moved in by value, a container can never end up below itself.
//! Appending does not fire lifecycle hooks; the caller decides when to report an insertion.

use super::super::error::ElementResult;
use super::super::state::Visibility;
use super::super::traits::AstNode;
use super::element::{ChildMut, Element};
use super::validate_tag;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    tag: String,
    children: Vec<Element>,
    state: Visibility,
}

impl Container {
    pub fn new(tag: impl Into<String>) -> ElementResult<Self> {
        Ok(Self {
            tag: validate_tag(tag.into())?,
            children: Vec::new(),
            state: Visibility::default(),
        })
    }

    /// Builder form of [Container::add_child]
    pub fn with_child(mut self, child: impl Into<Element>) -> Self {
        self.add_child(child);
        self
    }

    /// Append a child after the existing ones
    pub fn add_child(&mut self, child: impl Into<Element>) {
        let child = child.into();
        tracing::debug!(
            parent = %self.tag,
            child = %child.tag(),
            position = self.children.len(),
            "appending child"
        );
        self.children.push(child);
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Element> {
        self.children.get(index)
    }

    /// Handle to a child, e.g. to change its visibility after insertion
    pub fn child_mut(&mut self, index: usize) -> Option<ChildMut<'_>> {
        self.children.get_mut(index).map(ChildMut::new)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn set_state(&mut self, state: Visibility) {
        self.state = state;
    }
}

impl AstNode for Container {
    fn node_type(&self) -> &'static str {
        "Container"
    }

    fn display_label(&self) -> String {
        let noun = if self.children.len() == 1 {
            "child"
        } else {
            "children"
        };
        format!("<{}> ({} {})", self.tag, self.children.len(), noun)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Container('{}', {} items)", self.tag, self.children.len())
    }
}
