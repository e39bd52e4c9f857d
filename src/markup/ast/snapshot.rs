//! Element snapshot - a normalized, serializable copy of an element tree
//!
//! Serializers other than html consume a snapshot instead of walking elements themselves.
//! Attributes are kept in a sorted map so serialized output is stable.

use super::elements::Element;
use super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    /// The kind of element ("Text", "Image", "Container")
    pub node_type: String,

    /// Tag name of the element
    pub label: String,

    /// Kind-specific values (content, src) plus visibility
    pub attributes: BTreeMap<String, String>,

    pub children: Vec<ElementSnapshot>,
}

impl ElementSnapshot {
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_child(mut self, child: ElementSnapshot) -> Self {
        self.children.push(child);
        self
    }

    /// Number of nodes in this snapshot, itself included
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ElementSnapshot::node_count)
            .sum::<usize>()
    }
}

/// Build a snapshot of `element` and its whole subtree
pub fn snapshot_from_element(element: &Element) -> ElementSnapshot {
    let snapshot = ElementSnapshot::new(element.node_type().to_string(), element.tag().to_string())
        .with_attribute("visibility", &element.state().to_string());

    match element {
        Element::Text(text) => snapshot.with_attribute("content", text.content()),
        Element::Image(image) => snapshot.with_attribute("src", image.src()),
        Element::Container(container) => container
            .children()
            .iter()
            .map(snapshot_from_element)
            .fold(snapshot, ElementSnapshot::with_child),
    }
}
