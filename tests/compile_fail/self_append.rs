// An element cannot be appended below itself: the child is taken by value
// while the parent is still borrowed for the append.

use markup_tree::Container;

fn main() {
    let mut div = Container::new("div").unwrap();
    div.add_child(div);
}
