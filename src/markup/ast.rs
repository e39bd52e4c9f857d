//! Element tree definitions
//!
//!     This module holds the element model: the three element kinds, the visibility flag every
//!     element carries, the errors raised while building a tree, and the traversal helpers.
//!
//! Elements and Containment
//!
//!     A tree is made of [Element](elements::Element) values. Text and Image elements are leaves;
//!     a Container owns an ordered list of child elements, which may themselves be containers.
//!
//!     Children are moved into their parent on insertion. There are no back references, so an
//!     element cannot be appended below itself: the compiler rejects it, and every tree is finite.
//!     That finiteness is what lets [traverse](traversal::traverse) terminate.
//!
//! Rendering and State
//!
//!     Render output depends only on tags, content and child order. Visibility is carried
//!     alongside and reported separately (see [state](state)); it never changes the markup.
//!     Serializers live in [formats](crate::markup::formats).

pub mod elements;
pub mod error;
pub mod snapshot;
pub mod state;
pub mod traits;
pub mod traversal;

pub use elements::{ChildMut, Container, Element, Image, Text, IMAGE_TAG};
pub use error::{ElementError, ElementResult};
pub use snapshot::{snapshot_from_element, ElementSnapshot};
pub use state::Visibility;
pub use traits::AstNode;
pub use traversal::{find_by_tag, traverse, traverse_with_depth};
