pub mod catalog;
pub mod node;
pub mod page;
pub mod tag;

pub use catalog::{CatalogError, TagCatalog};
pub use node::{Node, PreOrder};
pub use page::Page;
pub use tag::{TEXT_ATTRIBUTE, TEXT_TAG, Tag};
