//! Image element
//!
//! Always tagged `img`, with a `src` and no children or closing tag: `<img src="...">`.

use super::super::state::Visibility;
use super::super::traits::{truncate_label, AstNode};
use std::fmt;

/// Tag name shared by every image element
pub const IMAGE_TAG: &str = "img";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    src: String,
    state: Visibility,
}

impl Image {
    /// Any source string is accepted, including an empty one
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            state: Visibility::default(),
        }
    }

    pub fn tag(&self) -> &str {
        IMAGE_TAG
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn set_state(&mut self, state: Visibility) {
        self.state = state;
    }
}

impl AstNode for Image {
    fn node_type(&self) -> &'static str {
        "Image"
    }

    fn display_label(&self) -> String {
        format!("<{}> {}", IMAGE_TAG, truncate_label(&self.src, 50))
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Image('{}')", self.src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_tag_is_fixed() {
        let image = Image::new("example.jpg");
        assert_eq!(image.tag(), "img");
        assert_eq!(image.src(), "example.jpg");
        assert_eq!(image.to_string(), "Image('example.jpg')");
    }
}
