//! Element
//!
//! `Element` is the common wrapper for the three element kinds. Containers hold elements,
//! traversal yields elements, and serializers dispatch on the variant with a single `match`.
//!
//! Examples:
//! - A `div` container holding a paragraph and an image
//! - A lone `p` text element used as the root of its own tree

use super::super::error::{ElementError, ElementResult};
use super::super::state::Visibility;
use super::super::traits::AstNode;
use super::container::Container;
use super::image::Image;
use super::text::Text;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Text(Text),
    Image(Image),
    Container(Container),
}

impl AstNode for Element {
    fn node_type(&self) -> &'static str {
        match self {
            Element::Text(t) => t.node_type(),
            Element::Image(i) => i.node_type(),
            Element::Container(c) => c.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Element::Text(t) => t.display_label(),
            Element::Image(i) => i.display_label(),
            Element::Container(c) => c.display_label(),
        }
    }
}

impl Element {
    pub fn tag(&self) -> &str {
        match self {
            Element::Text(t) => t.tag(),
            Element::Image(i) => i.tag(),
            Element::Container(c) => c.tag(),
        }
    }

    pub fn state(&self) -> Visibility {
        match self {
            Element::Text(t) => t.state(),
            Element::Image(i) => i.state(),
            Element::Container(c) => c.state(),
        }
    }

    pub fn set_state(&mut self, state: Visibility) {
        match self {
            Element::Text(t) => t.set_state(state),
            Element::Image(i) => i.set_state(state),
            Element::Container(c) => c.set_state(state),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state().is_visible()
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Element::Container(_))
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Element::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&Image> {
        match self {
            Element::Image(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Element::Container(c) => Some(c),
            _ => None,
        }
    }

    /// Children of a container; `None` for leaves
    pub fn children(&self) -> Option<&[Element]> {
        match self {
            Element::Container(c) => Some(c.children()),
            _ => None,
        }
    }

    /// Handle to a child for visibility changes and appends below it
    pub fn child_mut(&mut self, index: usize) -> Option<ChildMut<'_>> {
        match self {
            Element::Container(c) => c.child_mut(index),
            _ => None,
        }
    }

    /// Append a child. Only containers accept children.
    pub fn add_child(&mut self, child: impl Into<Element>) -> ElementResult<()> {
        match self {
            Element::Container(c) => {
                c.add_child(child);
                Ok(())
            }
            leaf => Err(ElementError::InvalidStructure {
                parent: leaf.tag().to_string(),
                reason: format!("{} elements cannot hold children", leaf.node_type()),
            }),
        }
    }

    /// Markup for this element and its subtree, with content embedded verbatim
    pub fn render(&self) -> String {
        crate::markup::formats::html::render(self)
    }

    /// Iterate this element and every element below it (depth-first pre-order)
    pub fn iter_all_nodes(&self) -> Box<dyn Iterator<Item = &Element> + '_> {
        Box::new(std::iter::once(self).chain(self.descendants()))
    }

    /// Iterate this element and its subtree with depths; this element is depth 0
    pub fn iter_all_nodes_with_depth(&self) -> Box<dyn Iterator<Item = (&Element, usize)> + '_> {
        Box::new(std::iter::once((self, 0)).chain(self.descendants_with_depth(1)))
    }

    /// Recursively iterate all descendants of this node (depth-first pre-order)
    /// Does not include the node itself, only its descendants
    pub fn descendants(&self) -> Box<dyn Iterator<Item = &Element> + '_> {
        if let Some(children) = self.children() {
            Box::new(
                children
                    .iter()
                    .flat_map(|child| std::iter::once(child).chain(child.descendants())),
            )
        } else {
            Box::new(std::iter::empty())
        }
    }

    /// Recursively iterate all descendants with their depth
    /// Direct children get `start_depth`, their children `start_depth + 1`, and so on
    pub fn descendants_with_depth(
        &self,
        start_depth: usize,
    ) -> Box<dyn Iterator<Item = (&Element, usize)> + '_> {
        if let Some(children) = self.children() {
            Box::new(children.iter().flat_map(move |child| {
                std::iter::once((child, start_depth))
                    .chain(child.descendants_with_depth(start_depth + 1))
            }))
        } else {
            Box::new(std::iter::empty())
        }
    }
}

/// Mutable handle to an element that already sits in a container
///
/// A child can be hidden or shown, and can take children of its own, but it can never be
/// replaced, taken out or reordered: the handle gives no `&mut Element` away.
#[derive(Debug)]
pub struct ChildMut<'a> {
    element: &'a mut Element,
}

impl<'a> ChildMut<'a> {
    pub(crate) fn new(element: &'a mut Element) -> Self {
        Self { element }
    }

    /// Read-only view, e.g. for rendering or firing lifecycle hooks
    pub fn element(&self) -> &Element {
        self.element
    }

    pub fn tag(&self) -> &str {
        self.element.tag()
    }

    pub fn state(&self) -> Visibility {
        self.element.state()
    }

    pub fn set_state(&mut self, state: Visibility) {
        self.element.set_state(state);
    }

    /// Append below this child; leaves reject it like [Element::add_child]
    pub fn add_child(&mut self, child: impl Into<Element>) -> ElementResult<()> {
        self.element.add_child(child)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<ChildMut<'_>> {
        self.element.child_mut(index)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Element::Text(text)
    }
}

impl From<Image> for Element {
    fn from(image: Image) -> Self {
        Element::Image(image)
    }
}

impl From<Container> for Element {
    fn from(container: Container) -> Self {
        Element::Container(container)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Text(t) => write!(f, "{}", t),
            Element::Image(i) => write!(f, "{}", i),
            Element::Container(c) => write!(f, "{}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Element {
        let inner = Container::new("section")
            .unwrap()
            .with_child(Text::new("h1", "Title").unwrap())
            .with_child(Image::new("a.png"));
        Container::new("div")
            .unwrap()
            .with_child(inner)
            .with_child(Text::new("p", "tail").unwrap())
            .into()
    }

    #[test]
    fn test_children_only_for_containers() {
        let text: Element = Text::new("p", "Hi").unwrap().into();
        let image: Element = Image::new("x.jpg").into();
        assert!(text.children().is_none());
        assert!(image.children().is_none());
        assert_eq!(sample_tree().children().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_add_child_rejects_leaves() {
        let mut text: Element = Text::new("p", "Hi").unwrap().into();
        let err = text.add_child(Image::new("x.jpg")).unwrap_err();
        assert_eq!(
            err,
            ElementError::InvalidStructure {
                parent: "p".to_string(),
                reason: "Text elements cannot hold children".to_string(),
            }
        );

        let mut image: Element = Image::new("x.jpg").into();
        assert!(image.add_child(Text::new("p", "Hi").unwrap()).is_err());
    }

    #[test]
    fn test_add_child_on_container_variant() {
        let mut div: Element = Container::new("div").unwrap().into();
        div.add_child(Text::new("p", "Hi").unwrap()).unwrap();
        assert_eq!(div.children().map(|c| c.len()), Some(1));
    }

    #[test]
    fn test_iter_all_nodes_pre_order() {
        let tree = sample_tree();
        let tags: Vec<&str> = tree.iter_all_nodes().map(|e| e.tag()).collect();
        assert_eq!(tags, vec!["div", "section", "h1", "img", "p"]);
    }

    #[test]
    fn test_descendants_excludes_self() {
        let tree = sample_tree();
        assert_eq!(tree.descendants().count(), 4);
        assert_eq!(tree.descendants().next().map(|e| e.tag()), Some("section"));
    }

    #[test]
    fn test_depths() {
        let tree = sample_tree();
        let depths: Vec<(&str, usize)> = tree
            .iter_all_nodes_with_depth()
            .map(|(e, d)| (e.tag(), d))
            .collect();
        assert_eq!(
            depths,
            vec![("div", 0), ("section", 1), ("h1", 2), ("img", 2), ("p", 1)]
        );
    }

    #[test]
    fn test_set_state_through_child_mut() {
        let mut tree = sample_tree();
        tree.child_mut(1)
            .expect("second child")
            .set_state(Visibility::Hidden);
        let hidden: Vec<&str> = tree
            .iter_all_nodes()
            .filter(|e| !e.is_visible())
            .map(|e| e.tag())
            .collect();
        assert_eq!(hidden, vec!["p"]);
    }

    #[test]
    fn test_child_handle_reaches_nested_children() {
        let mut tree = sample_tree();
        let mut section = tree.child_mut(0).expect("section");
        section
            .child_mut(1)
            .expect("img")
            .set_state(Visibility::Hidden);
        section.add_child(Text::new("figcaption", "A").unwrap()).unwrap();
        assert_eq!(section.element().children().map(|c| c.len()), Some(3));

        assert_eq!(
            tree.render(),
            "<div><section><h1>Title</h1><img src=\"a.png\"><figcaption>A</figcaption></section><p>tail</p></div>"
        );
        let hidden: Vec<&str> = tree
            .iter_all_nodes()
            .filter(|e| !e.is_visible())
            .map(|e| e.tag())
            .collect();
        assert_eq!(hidden, vec!["img"]);
    }

    #[test]
    fn test_child_handle_keeps_siblings_in_place() {
        let mut tree = sample_tree();
        let before: Vec<String> = tree.descendants().map(|e| e.to_string()).collect();

        let mut tail = tree.child_mut(1).expect("tail");
        tail.set_state(Visibility::Hidden);
        assert!(tail.add_child(Image::new("x.jpg")).is_err());
        assert!(tail.child_mut(0).is_none());

        let after: Vec<String> = tree.descendants().map(|e| e.to_string()).collect();
        assert_eq!(before, after);
        assert!(tree.child_mut(2).is_none());
    }
}
