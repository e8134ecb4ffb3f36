// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use pagetree_engine::{Node, Tag};

/// A page with `sections` sections, each holding `items` list items
#[allow(dead_code)]
pub fn generate_page(sections: usize, items: usize) -> Node {
    let body = Node::new(Tag::new("body", true)).with_children((0..sections).map(|section| {
        Node::new(Tag::new("div", true).with_attribute("class", "section"))
            .with_child(
                Node::new(Tag::new("h2", true))
                    .with_child(Node::new(Tag::text(format!("Section {section}")))),
            )
            .with_child(
                Node::new(Tag::new("ul", true)).with_children((0..items).map(|item| {
                    Node::new(Tag::new("li", true).with_attribute("id", format!("s{section}-{item}")))
                        .with_child(Node::new(Tag::text(format!("Item {item}"))))
                })),
            )
    }));

    Node::new(Tag::new("html", true)).with_children([
        Node::new(Tag::new("head", true))
            .with_child(Node::new(Tag::new("title", true)).with_child(Node::new(Tag::text("Bench")))),
        body,
    ])
}

/// A single chain of nested divs `depth` levels deep
#[allow(dead_code)]
pub fn generate_deep_page(depth: usize) -> Node {
    let mut node = Node::new(Tag::text("bottom"));
    for _ in 0..depth {
        node = Node::new(Tag::new("div", true)).with_child(node);
    }
    node
}
