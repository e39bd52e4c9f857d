//! Construction and structure errors

use markup_tree::{Container, Element, ElementError, Image, Text};
use rstest::rstest;

#[rstest]
#[case::text(Text::new("", "x").map(Element::from))]
#[case::container(Container::new("").map(Element::from))]
fn test_empty_tag_is_rejected(#[case] result: Result<Element, ElementError>) {
    match result {
        Err(ElementError::InvalidArgument { field, .. }) => assert_eq!(field, "tag"),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn test_leaf_rejects_children() {
    let mut image = Element::from(Image::new("x.jpg"));
    let err = image
        .add_child(Text::new("p", "Hi").unwrap())
        .unwrap_err();
    assert!(matches!(err, ElementError::InvalidStructure { ref parent, .. } if parent == "img"));
    assert_eq!(
        err.to_string(),
        "Invalid structure under <img>: Image elements cannot hold children"
    );
    assert!(image.children().is_none());
}

#[test]
fn test_whitespace_tag_is_accepted() {
    // Only empty tags are rejected; anything else is embedded as given.
    let text = Text::new(" ", "x").unwrap();
    assert_eq!(Element::from(text).render(), "< >x</ >");
}
