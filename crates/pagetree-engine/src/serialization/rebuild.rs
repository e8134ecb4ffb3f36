use std::collections::HashMap;

use super::{FlatRecord, FormatError};
use crate::models::{Node, Tag};

/// Knobs for [`rebuild_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildOptions {
    /// Reject records whose stored child count disagrees with the number of
    /// children that actually point at them.
    pub verify_child_counts: bool,
}

impl Default for RebuildOptions {
    fn default() -> Self {
        Self {
            verify_child_counts: true,
        }
    }
}

/// Rebuild a tree from flattened records using the default options.
pub fn rebuild(records: &[FlatRecord]) -> Result<Node, FormatError> {
    rebuild_with(records, RebuildOptions::default())
}

struct Slot {
    tag: Tag,
    node_index: usize,
    expected_children: usize,
    /// Positions (in `records`) of this node's children, in consumption order
    children: Vec<usize>,
}

/// Rebuild a tree from flattened records.
///
/// Edges come from `parent_index` alone. Children are appended to their
/// parent in the order their records are consumed, which restores the
/// original sibling order for any pre-order sequence. Every parent must
/// appear before its children.
pub fn rebuild_with(records: &[FlatRecord], options: RebuildOptions) -> Result<Node, FormatError> {
    if records.is_empty() {
        return Err(FormatError::Empty);
    }
    if !records.iter().any(FlatRecord::is_root) {
        return Err(FormatError::MissingRoot);
    }

    let mut slots: Vec<Slot> = Vec::with_capacity(records.len());
    let mut positions: HashMap<usize, usize> = HashMap::with_capacity(records.len());
    let mut root: Option<usize> = None;

    for (position, record) in records.iter().enumerate() {
        if positions.contains_key(&record.node_index) {
            return Err(FormatError::DuplicateIndex(record.node_index));
        }

        match record.parent_index {
            None => {
                if let Some(first) = root {
                    return Err(FormatError::MultipleRoots {
                        first: slots[first].node_index,
                        second: record.node_index,
                    });
                }
                root = Some(position);
            }
            Some(parent_index) => {
                let parent = *positions.get(&parent_index).ok_or(FormatError::DanglingParent {
                    node_index: record.node_index,
                    parent_index,
                })?;
                slots[parent].children.push(position);
            }
        }

        positions.insert(record.node_index, position);
        slots.push(Slot {
            tag: record.tag.clone(),
            node_index: record.node_index,
            expected_children: record.child_count,
            children: Vec::new(),
        });
    }

    let root = root.ok_or(FormatError::MissingRoot)?;

    if options.verify_child_counts {
        for slot in &slots {
            if slot.children.len() != slot.expected_children {
                return Err(FormatError::ChildCountMismatch {
                    node_index: slot.node_index,
                    expected: slot.expected_children,
                    actual: slot.children.len(),
                });
            }
        }
    }

    // A child's position is always greater than its parent's, so building
    // from the back finishes every subtree before its parent claims it.
    let mut built: Vec<Option<Node>> = Vec::with_capacity(slots.len());
    built.resize_with(slots.len(), || None);
    for (position, slot) in slots.into_iter().enumerate().rev() {
        let children = slot
            .children
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        built[position] = Some(Node {
            tag: slot.tag,
            children,
        });
    }

    let tree = built[root].take().ok_or(FormatError::MissingRoot)?;
    log::debug!("rebuilt tag tree with {} nodes", records.len());
    Ok(tree)
}
