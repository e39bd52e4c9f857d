//! Indented outline of an element tree
//!
//! One line per element in traversal order, indented two spaces per level. Hidden elements
//! are marked so visibility can be checked at a glance.
//!
//!     Container <div> (2 children)
//!       Text <p> Hello, World!  [hidden]
//!       Image <img> example.jpg

use crate::markup::ast::{traverse_with_depth, AstNode, Element};

const INDENT: &str = "  ";

pub fn serialize(element: &Element) -> String {
    let mut out = String::new();
    for (node, depth) in traverse_with_depth(element) {
        out.push_str(&INDENT.repeat(depth));
        out.push_str(node.node_type());
        out.push(' ');
        out.push_str(&node.display_label());
        if !node.is_visible() {
            out.push_str("  [hidden]");
        }
        out.push('\n');
    }
    out
}
