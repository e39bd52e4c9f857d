//! Markup serializer
//!
//!     Text       <tag>content</tag>
//!     Image      <img src="src">
//!     Container  <tag>children...</tag>
//!
//! Output depends only on tags, content and child order; visibility is ignored. Nothing is
//! escaped unless [RenderOptions::escape_special_chars] is set, and tag names are never escaped.
//!
//! Serialization recurses once per nesting level, so nesting depth is bounded by the stack.

use super::RenderOptions;
use crate::markup::ast::Element;

/// Render with default options (content embedded verbatim)
pub fn render(element: &Element) -> String {
    render_with(element, &RenderOptions::default())
}

pub fn render_with(element: &Element, options: &RenderOptions) -> String {
    let mut out = String::new();
    write_element(&mut out, element, options);
    out
}

fn write_element(out: &mut String, element: &Element, options: &RenderOptions) {
    match element {
        Element::Text(text) => {
            open_tag(out, text.tag());
            push_value(out, text.content(), options);
            close_tag(out, text.tag());
        }
        Element::Image(image) => {
            out.push('<');
            out.push_str(image.tag());
            out.push_str(" src=\"");
            push_value(out, image.src(), options);
            out.push_str("\">");
        }
        Element::Container(container) => {
            open_tag(out, container.tag());
            for child in container.children() {
                write_element(out, child, options);
            }
            close_tag(out, container.tag());
        }
    }
}

fn open_tag(out: &mut String, tag: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_value(out: &mut String, value: &str, options: &RenderOptions) {
    if options.escape_special_chars {
        out.push_str(&escape_markup(value));
    } else {
        out.push_str(value);
    }
}

/// Escape markup special characters
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}
