use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::models::{Node, Tag};
use crate::serialization::FlatRecord;

/// Create a temporary directory for file tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file with content inside a test directory
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// `html > (head > title > "My Page", body > (p#intro > "Hello", ul > (li, li)))`
///
/// The paragraph also carries an empty `class` attribute.
pub fn sample_tree() -> Node {
    Node::new(Tag::new("html", true)).with_children([
        Node::new(Tag::new("head", true)).with_child(
            Node::new(Tag::new("title", true)).with_child(Node::new(Tag::text("My Page"))),
        ),
        Node::new(Tag::new("body", true)).with_children([
            Node::new(
                Tag::new("p", true)
                    .with_attribute("class", "")
                    .with_attribute("id", "intro")
                    .with_legal_parent("body"),
            )
            .with_child(Node::new(Tag::text("Hello"))),
            Node::new(Tag::new("ul", true)).with_children([
                Node::new(Tag::new("li", true)),
                Node::new(Tag::new("li", true)),
            ]),
        ]),
    ])
}

/// A record for hand-built sequences; only the fields rebuild looks at matter
pub fn record(
    name: &str,
    node_index: usize,
    parent_index: Option<usize>,
    child_count: usize,
) -> FlatRecord {
    FlatRecord {
        tag: Tag::new(name, true),
        child_count,
        node_index,
        parent_index,
    }
}
