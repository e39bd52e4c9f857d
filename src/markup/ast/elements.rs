//! Element kinds
//!
//!     There are three kinds of elements:
//!
//!         - Text: a tag wrapping a run of text. See [text](text).
//!         - Image: an `img` tag pointing at a source. See [image](image).
//!         - Container: a tag wrapping an ordered list of child elements. See [container](container).
//!
//!     [Element](element::Element) is the sum type over the three, and is what containers hold
//!     and what traversal yields.
//!
//!     Tags are fixed at construction and must not be empty. Text content and image sources are
//!     also fixed; only a container's child list (append only) and each element's visibility can
//!     change afterwards.

pub mod container;
pub mod element;
pub mod image;
pub mod text;

pub use container::Container;
pub use element::{ChildMut, Element};
pub use image::{Image, IMAGE_TAG};
pub use text::Text;

use super::error::{ElementError, ElementResult};

pub(crate) fn validate_tag(tag: String) -> ElementResult<String> {
    if tag.is_empty() {
        return Err(ElementError::empty_tag());
    }
    Ok(tag)
}
