//! # markup-tree
//!
//! A miniature HTML element tree: build element nodes, render them to markup and walk them
//! depth-first.
//!
//! File Layout
//!
//!     src/markup
//!       ├── ast         Element types, visibility state, errors and traversal
//!       ├── formats     Serializers (html, json, treeviz)
//!       ├── lifecycle   Created / inserted / removed hooks and their observers
//!       └── testing     Fluent assertions and a recording observer for tests
//!
//! The demo binary (`src/bin/markup.rs`) is sample usage only; everything reusable lives
//! under [markup].

pub mod markup;

pub use markup::ast::{
    traverse, ChildMut, Container, Element, ElementError, ElementResult, Image, Text,
    Visibility,
};
pub use markup::formats::{render, render_with, Format, RenderOptions};
pub use markup::lifecycle::{LifecycleEvent, LifecycleObserver};
