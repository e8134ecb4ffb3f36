use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::FormatError;
use crate::models::{Node, Tag};

/// Wire value of `parent_index` for the root record.
pub const NO_PARENT: i64 = -1;

/// One node of a flattened tree.
///
/// `node_index` and `parent_index` only mean something within the sequence
/// they were produced in; they are never stored on the [`Tag`] itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordWire", into = "RecordWire")]
pub struct FlatRecord {
    pub tag: Tag,
    /// Number of children the node had when flattened
    pub child_count: usize,
    pub node_index: usize,
    /// `None` for the root
    pub parent_index: Option<usize>,
}

impl FlatRecord {
    pub fn new(node: &Node, node_index: usize, parent_index: Option<usize>) -> Self {
        Self {
            tag: node.tag.clone(),
            child_count: node.children.len(),
            node_index,
            parent_index,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_index.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AttributeWire {
    attribute_name: String,
    attribute_value: String,
}

/// Field layout of a record inside the save file's `tag_tree` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordWire {
    tag: String,
    has_closing_tag: bool,
    #[serde(default)]
    legal_parents: Vec<String>,
    #[serde(default)]
    attributes: Vec<AttributeWire>,
    number_of_children: usize,
    node_index: i64,
    parent_index: i64,
}

impl From<FlatRecord> for RecordWire {
    fn from(record: FlatRecord) -> Self {
        let Tag {
            name,
            closable,
            attributes,
            legal_parents,
        } = record.tag;

        Self {
            tag: name,
            has_closing_tag: closable,
            legal_parents,
            attributes: attributes
                .into_iter()
                .map(|(attribute_name, attribute_value)| AttributeWire {
                    attribute_name,
                    attribute_value,
                })
                .collect(),
            number_of_children: record.child_count,
            node_index: record.node_index as i64,
            parent_index: record.parent_index.map_or(NO_PARENT, |p| p as i64),
        }
    }
}

impl TryFrom<RecordWire> for FlatRecord {
    type Error = FormatError;

    fn try_from(wire: RecordWire) -> Result<Self, Self::Error> {
        let node_index = usize::try_from(wire.node_index).map_err(|_| FormatError::InvalidIndex {
            field: "node_index",
            value: wire.node_index,
        })?;

        let parent_index = match wire.parent_index {
            NO_PARENT => None,
            value => Some(
                usize::try_from(value).map_err(|_| FormatError::InvalidIndex {
                    field: "parent_index",
                    value,
                })?,
            ),
        };

        let mut attributes = BTreeMap::new();
        for attribute in wire.attributes {
            if attributes.contains_key(&attribute.attribute_name) {
                return Err(FormatError::DuplicateAttribute {
                    node_index,
                    name: attribute.attribute_name,
                });
            }
            attributes.insert(attribute.attribute_name, attribute.attribute_value);
        }

        let tag = Tag {
            name: wire.tag,
            closable: wire.has_closing_tag,
            attributes,
            legal_parents: wire.legal_parents,
        };

        Ok(Self {
            tag,
            child_count: wire.number_of_children,
            node_index,
            parent_index,
        })
    }
}
