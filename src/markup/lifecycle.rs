//! Lifecycle hooks
//!
//!     Elements report three lifecycle points: created, inserted into a document, and removed
//!     from it. Hooks are called explicitly by whoever performs the action;
//!     [Container::add_child](crate::markup::ast::Container::add_child) does not fire them.
//!
//!     Each hook produces a default line naming the element's tag, followed by an optional
//!     line specific to the element kind:
//!
//!         created   "Element {tag} created."                       + kind line
//!         inserted  "Element {tag} inserted into the document."
//!         removed   "Element {tag} removed from the document."
//!
//!     Kind lines (created only):
//!
//!         Text       "Text content '{content}' rendered for {tag} element."
//!         Image      "Image element with src '{src}' created."
//!         Container  "Container element '{tag}' created."
//!
//!     Hooks borrow the element immutably, so they cannot touch tags, content or children.
//!     Lines go to a [LifecycleObserver]; the plain `on_*` methods use [TracingObserver].

use crate::markup::ast::Element;
use std::fmt;

const LOG_TARGET: &str = "markup_tree::lifecycle";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    Created,
    Inserted,
    Removed,
}

impl LifecycleEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEvent::Created => "created",
            LifecycleEvent::Inserted => "inserted",
            LifecycleEvent::Removed => "removed",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives every line a hook produces, in order
pub trait LifecycleObserver {
    fn observe(&mut self, element: &Element, event: LifecycleEvent, line: &str);
}

impl<F> LifecycleObserver for F
where
    F: FnMut(&Element, LifecycleEvent, &str),
{
    fn observe(&mut self, element: &Element, event: LifecycleEvent, line: &str) {
        self(element, event, line)
    }
}

/// Emits each line as an `info` event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LifecycleObserver for TracingObserver {
    fn observe(&mut self, element: &Element, event: LifecycleEvent, line: &str) {
        tracing::info!(
            target: LOG_TARGET,
            event = event.as_str(),
            tag = element.tag(),
            "{}",
            line
        );
    }
}

/// Lines a hook produces for `element`, default line first
pub fn lifecycle_lines(element: &Element, event: LifecycleEvent) -> Vec<String> {
    let mut lines = vec![default_line(element, event)];
    lines.extend(kind_line(element, event));
    lines
}

fn default_line(element: &Element, event: LifecycleEvent) -> String {
    match event {
        LifecycleEvent::Created => format!("Element {} created.", element.tag()),
        LifecycleEvent::Inserted => {
            format!("Element {} inserted into the document.", element.tag())
        }
        LifecycleEvent::Removed => format!("Element {} removed from the document.", element.tag()),
    }
}

fn kind_line(element: &Element, event: LifecycleEvent) -> Option<String> {
    match (event, element) {
        (LifecycleEvent::Created, Element::Text(text)) => Some(format!(
            "Text content '{}' rendered for {} element.",
            text.content(),
            text.tag()
        )),
        (LifecycleEvent::Created, Element::Image(image)) => Some(format!(
            "Image element with src '{}' created.",
            image.src()
        )),
        (LifecycleEvent::Created, Element::Container(container)) => Some(format!(
            "Container element '{}' created.",
            container.tag()
        )),
        _ => None,
    }
}

/// Run the hook for `event`, handing each line to `observer`
pub fn notify(element: &Element, event: LifecycleEvent, observer: &mut dyn LifecycleObserver) {
    for line in lifecycle_lines(element, event) {
        observer.observe(element, event, &line);
    }
}

impl Element {
    pub fn on_created(&self) {
        self.on_created_with(&mut TracingObserver);
    }

    pub fn on_inserted(&self) {
        self.on_inserted_with(&mut TracingObserver);
    }

    pub fn on_removed(&self) {
        self.on_removed_with(&mut TracingObserver);
    }

    pub fn on_created_with(&self, observer: &mut dyn LifecycleObserver) {
        notify(self, LifecycleEvent::Created, observer);
    }

    pub fn on_inserted_with(&self, observer: &mut dyn LifecycleObserver) {
        notify(self, LifecycleEvent::Inserted, observer);
    }

    pub fn on_removed_with(&self, observer: &mut dyn LifecycleObserver) {
        notify(self, LifecycleEvent::Removed, observer);
    }
}
