//! Tree traversal
//!
//! All walks are depth-first pre-order: the root first, then each child's whole subtree in
//! child order. The iterators borrow the tree, so it cannot change while a walk is running;
//! calling again starts a fresh walk.
//!
//! Each nesting level adds a frame to the walk (and to dropping the tree), so nesting depth is
//! bounded by the stack.

use super::elements::Element;

/// Every element of the tree rooted at `root`, root first
pub fn traverse(root: &Element) -> impl Iterator<Item = &Element> + '_ {
    root.iter_all_nodes()
}

/// Like [traverse], paired with each element's depth (the root is depth 0)
pub fn traverse_with_depth(root: &Element) -> impl Iterator<Item = (&Element, usize)> + '_ {
    root.iter_all_nodes_with_depth()
}

/// All elements carrying `tag`, in traversal order
pub fn find_by_tag<'a>(root: &'a Element, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    traverse(root).filter(move |element| element.tag() == tag)
}
