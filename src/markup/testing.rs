//! Testing utilities for element trees
//!
//!     Two helpers keep tests short and focused on content rather than on walking the tree
//!     by hand:
//!
//!         - [assert_element]: a fluent assertion API over an element and its children.
//!         - [RecordingObserver]: collects lifecycle lines instead of logging them.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     use markup_tree::markup::testing::assert_element;
//!
//!     assert_element(&root)
//!         .container("div")
//!         .child_count(2)
//!         .child(0, |child| {
//!             child.text("p").content("Hi").visible(true);
//!         })
//!         .child(1, |child| {
//!             child.image().src("x.jpg");
//!         });
//!     ```

use crate::markup::ast::{AstNode, Element};
use crate::markup::lifecycle::{LifecycleEvent, LifecycleObserver};

/// Observer that stores every lifecycle line it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub records: Vec<(String, LifecycleEvent, String)>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Just the lines, in the order they were produced
    pub fn lines(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|(_, _, line)| line.as_str())
            .collect()
    }
}

impl LifecycleObserver for RecordingObserver {
    fn observe(&mut self, element: &Element, event: LifecycleEvent, line: &str) {
        self.records
            .push((element.tag().to_string(), event, line.to_string()));
    }
}

/// Start a fluent assertion chain on `element`
pub fn assert_element(element: &Element) -> ElementAssertion<'_> {
    ElementAssertion {
        element,
        context: "root".to_string(),
    }
}

pub struct ElementAssertion<'a> {
    element: &'a Element,
    context: String,
}

impl<'a> ElementAssertion<'a> {
    fn expect_kind(self, node_type: &str, tag: &str) -> Self {
        assert_eq!(
            self.element.node_type(),
            node_type,
            "{}: expected {} element, found {}",
            self.context,
            node_type,
            self.element
        );
        assert_eq!(
            self.element.tag(),
            tag,
            "{}: tag mismatch",
            self.context
        );
        self
    }

    pub fn text(self, tag: &str) -> Self {
        self.expect_kind("Text", tag)
    }

    pub fn image(self) -> Self {
        self.expect_kind("Image", crate::markup::ast::IMAGE_TAG)
    }

    pub fn container(self, tag: &str) -> Self {
        self.expect_kind("Container", tag)
    }

    pub fn content(self, expected: &str) -> Self {
        let text = self
            .element
            .as_text()
            .unwrap_or_else(|| panic!("{}: {} has no text content", self.context, self.element));
        assert_eq!(text.content(), expected, "{}: content mismatch", self.context);
        self
    }

    pub fn src(self, expected: &str) -> Self {
        let image = self
            .element
            .as_image()
            .unwrap_or_else(|| panic!("{}: {} has no src", self.context, self.element));
        assert_eq!(image.src(), expected, "{}: src mismatch", self.context);
        self
    }

    pub fn visible(self, expected: bool) -> Self {
        assert_eq!(
            self.element.is_visible(),
            expected,
            "{}: visibility mismatch",
            self.context
        );
        self
    }

    pub fn renders(self, expected: &str) -> Self {
        assert_eq!(self.element.render(), expected, "{}: markup mismatch", self.context);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.element.children().map_or(0, |children| children.len());
        assert_eq!(actual, expected, "{}: child count mismatch", self.context);
        self
    }

    pub fn child<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        let child = self
            .element
            .children()
            .and_then(|children| children.get(index))
            .unwrap_or_else(|| panic!("{}: no child at index {}", self.context, index));
        check(ElementAssertion {
            element: child,
            context: format!("{} > {}[{}]", self.context, child.tag(), index),
        });
        self
    }
}
