//! Lifecycle hook output and its lack of side effects

use markup_tree::markup::lifecycle::lifecycle_lines;
use markup_tree::markup::testing::RecordingObserver;
use markup_tree::{Container, Element, Image, LifecycleEvent, Text};
use rstest::rstest;

#[rstest]
#[case::text(
    Text::new("p", "Hello, World!").unwrap().into(),
    &["Element p created.", "Text content 'Hello, World!' rendered for p element."]
)]
#[case::image(
    Image::new("example.jpg").into(),
    &["Element img created.", "Image element with src 'example.jpg' created."]
)]
#[case::container(
    Container::new("div").unwrap().into(),
    &["Element div created.", "Container element 'div' created."]
)]
fn test_created_lines(#[case] element: Element, #[case] expected: &[&str]) {
    let mut recorder = RecordingObserver::new();
    element.on_created_with(&mut recorder);
    assert_eq!(recorder.lines(), expected);
}

#[test]
fn test_sample_document_sequence() {
    let text = Element::from(Text::new("p", "Hello, World!").unwrap());
    let image = Element::from(Image::new("example.jpg"));
    let mut root = Element::from(Container::new("div").unwrap());
    let mut recorder = RecordingObserver::new();

    text.on_created_with(&mut recorder);
    image.on_created_with(&mut recorder);
    root.add_child(text).unwrap();
    root.add_child(image).unwrap();
    root.on_created_with(&mut recorder);
    root.children().unwrap()[0].on_removed_with(&mut recorder);

    assert_eq!(
        recorder.lines(),
        vec![
            "Element p created.",
            "Text content 'Hello, World!' rendered for p element.",
            "Element img created.",
            "Image element with src 'example.jpg' created.",
            "Element div created.",
            "Container element 'div' created.",
            "Element p removed from the document.",
        ]
    );
}

#[test]
fn test_add_child_fires_no_hook() {
    let mut root = Container::new("div").unwrap();
    let mut recorder = RecordingObserver::new();
    root.add_child(Text::new("p", "Hi").unwrap());
    Element::from(root).on_inserted_with(&mut recorder);
    // Only the explicit call produced output.
    assert_eq!(recorder.lines(), vec!["Element div inserted into the document."]);
}

#[test]
fn test_hooks_leave_element_untouched() {
    let root: Element = Container::new("div")
        .unwrap()
        .with_child(Text::new("p", "Hi").unwrap())
        .with_child(Image::new("x.jpg"))
        .into();
    let before = root.clone();

    let mut recorder = RecordingObserver::new();
    for event in [
        LifecycleEvent::Created,
        LifecycleEvent::Inserted,
        LifecycleEvent::Removed,
    ] {
        for element in markup_tree::traverse(&root) {
            markup_tree::markup::lifecycle::notify(element, event, &mut recorder);
        }
    }
    root.on_created();

    assert_eq!(root, before);
    assert_eq!(root.render(), before.render());
    // 3 created pairs + 3 inserted + 3 removed
    assert_eq!(recorder.records.len(), 12);
}

#[test]
fn test_lines_name_the_tag() {
    let text: Element = Text::new("article", "x").unwrap().into();
    for event in [LifecycleEvent::Inserted, LifecycleEvent::Removed] {
        let lines = lifecycle_lines(&text, event);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Element article "));
    }
}
