use serde::Deserialize;
use std::collections::BTreeSet;

use super::{Node, Tag};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("malformed tag catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tag '{0}' is defined more than once")]
    DuplicateTag(String),
}

#[derive(Deserialize)]
struct CatalogFile {
    tags: Vec<CatalogEntry>,
}

/// A catalog entry. Unlike the save file, `has_closing_tag` is textual here
/// and attributes are bare names.
#[derive(Deserialize)]
struct CatalogEntry {
    tag: String,
    has_closing_tag: String,
    #[serde(default)]
    attributes: Vec<String>,
    #[serde(default)]
    legal_parents: Vec<String>,
}

impl From<CatalogEntry> for Tag {
    fn from(entry: CatalogEntry) -> Self {
        let closable = entry.has_closing_tag.trim().eq_ignore_ascii_case("true");
        Tag {
            name: entry.tag,
            closable,
            attributes: entry
                .attributes
                .into_iter()
                .map(|name| (name, String::new()))
                .collect(),
            legal_parents: entry.legal_parents,
        }
    }
}

/// The tags an editor may build pages from, in catalog order.
///
/// Each entry is a prototype: every editable attribute is present with an
/// empty value, ready to be filled in on a copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCatalog {
    prototypes: Vec<Tag>,
}

impl TagCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for entry in file.tags {
            catalog.add(entry.into())?;
        }
        log::debug!("loaded tag catalog with {} tags", catalog.len());
        Ok(catalog)
    }

    pub fn add(&mut self, prototype: Tag) -> Result<(), CatalogError> {
        if self.get(&prototype.name).is_some() {
            return Err(CatalogError::DuplicateTag(prototype.name));
        }
        self.prototypes.push(prototype);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.prototypes.iter().find(|tag| tag.name == name)
    }

    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.prototypes.iter()
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// A fresh, childless node copied from the named prototype
    pub fn instantiate(&self, name: &str) -> Option<Node> {
        self.get(name).cloned().map(Node::new)
    }

    /// Whether the catalog lists `parent` as a legal parent of `child`.
    /// Unknown child tags are never allowed.
    pub fn can_contain(&self, parent: &str, child: &str) -> bool {
        self.get(child).is_some_and(|tag| tag.allows_parent(parent))
    }

    /// Names used in `root`'s subtree that the catalog does not define, sorted
    pub fn unknown_tags<'a>(&self, root: &'a Node) -> BTreeSet<&'a str> {
        root.iter()
            .map(|node| node.tag.name.as_str())
            .filter(|name| self.get(name).is_none())
            .collect()
    }
}
