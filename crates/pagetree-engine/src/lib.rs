pub mod io;
pub mod models;
pub mod outline;
pub mod render;
pub mod serialization;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use outline::{OutlineEntry, outline};
pub use render::{DOCTYPE_DECLARATION, render, render_into, render_page};
pub use serialization::{
    DocumentError, FlatRecord, FormatError, RebuildOptions, SaveDocument, flatten, rebuild,
    rebuild_with,
};
