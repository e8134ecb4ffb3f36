use serde::{Deserialize, Serialize};

use super::{FlatRecord, FormatError};

/// Top-level shape of a save file.
///
/// `tag_tree` holds the records in pre-order. That order is load-bearing:
/// rebuilding relies on it to restore sibling order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDocument {
    pub tag_tree: Vec<FlatRecord>,
    #[serde(default)]
    pub css_content: String,
}

impl SaveDocument {
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("malformed save file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("inconsistent tag tree: {0}")]
    Format(#[from] FormatError),
}
