//! # Save-file serialization
//!
//! A tag tree is saved as a flat list of records, one per node, each naming
//! its parent by index:
//!
//! - **`flatten`**: pre-order walk assigning indices `0..N` (root = 0,
//!   `parent_index = -1`)
//! - **`rebuild`**: inverse of `flatten`; edges come from `parent_index`,
//!   sibling order from record order
//! - **`record`**: the `FlatRecord` type and its JSON field layout
//! - **`document`**: the save file wrapper (`tag_tree` + `css_content`)
//!
//! Neither direction touches the file system; see [`crate::io`] for that.

pub mod document;
pub mod error;
pub mod flatten;
pub mod rebuild;
pub mod record;

pub use document::{DocumentError, SaveDocument};
pub use error::FormatError;
pub use flatten::flatten;
pub use rebuild::{RebuildOptions, rebuild, rebuild_with};
pub use record::{FlatRecord, NO_PARENT};
