use crate::models::{Node, TEXT_ATTRIBUTE};

/// One row of a read-only view of a tree.
///
/// Indices match the ones [`flatten`](crate::serialization::flatten) assigns,
/// so a viewer can hold a `node_index` and resolve it with [`Node::get`]
/// without keeping references into the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub node_index: usize,
    pub parent_index: Option<usize>,
    pub depth: usize,
    pub name: String,
    pub child_count: usize,
    /// Text of a text node, for display next to its name
    pub text: Option<String>,
}

/// Snapshot of the tree in pre-order, one entry per node.
pub fn outline(root: &Node) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    let mut stack: Vec<(&Node, Option<usize>, usize)> = vec![(root, None, 0)];

    while let Some((node, parent_index, depth)) = stack.pop() {
        let node_index = entries.len();
        entries.push(OutlineEntry {
            node_index,
            parent_index,
            depth,
            name: node.tag.name.clone(),
            child_count: node.children.len(),
            text: node.tag.is_text().then(|| {
                node.tag
                    .attribute(TEXT_ATTRIBUTE)
                    .unwrap_or_default()
                    .to_string()
            }),
        });
        stack.extend(
            node.children
                .iter()
                .rev()
                .map(|child| (child, Some(node_index), depth + 1)),
        );
    }

    entries
}
