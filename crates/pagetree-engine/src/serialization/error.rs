/// A flat record sequence that cannot be turned back into a single tree.
///
/// Any of these aborts the whole load; no partial tree is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("tag tree is empty")]
    Empty,
    #[error("tag tree has no root record (parent_index = -1)")]
    MissingRoot,
    #[error("tag tree has more than one root: nodes {first} and {second}")]
    MultipleRoots { first: usize, second: usize },
    #[error("node {node_index} refers to parent {parent_index}, which has not been seen")]
    DanglingParent {
        node_index: usize,
        parent_index: usize,
    },
    #[error("node index {0} appears more than once")]
    DuplicateIndex(usize),
    #[error("node {node_index} repeats attribute '{name}'")]
    DuplicateAttribute { node_index: usize, name: String },
    #[error("invalid {field} value {value}")]
    InvalidIndex { field: &'static str, value: i64 },
    #[error("node {node_index} declares {expected} children but has {actual}")]
    ChildCountMismatch {
        node_index: usize,
        expected: usize,
        actual: usize,
    },
}
