use super::FlatRecord;
use crate::models::Node;

/// Flatten a tree into one record per node, in pre-order.
///
/// Node indices are assigned sequentially from 0 (the root) in visit order,
/// so every parent index is smaller than the index of the node pointing at
/// it. The source tree is not modified.
pub fn flatten(root: &Node) -> Vec<FlatRecord> {
    let mut records = Vec::new();
    let mut stack: Vec<(&Node, Option<usize>)> = vec![(root, None)];

    while let Some((node, parent_index)) = stack.pop() {
        let node_index = records.len();
        records.push(FlatRecord::new(node, node_index, parent_index));

        // Reversed so the first child is popped (and numbered) first
        stack.extend(
            node.children
                .iter()
                .rev()
                .map(|child| (child, Some(node_index))),
        );
    }

    log::debug!("flattened tag tree into {} records", records.len());
    records
}
