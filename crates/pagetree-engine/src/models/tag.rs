use std::collections::BTreeMap;

/// Tag name of a plain-text leaf. Text nodes render only their text value.
pub const TEXT_TAG: &str = "Text";

/// Attribute holding the content of a text node.
pub const TEXT_ATTRIBUTE: &str = "text";

/// The payload of a node: what kind of tag it is and how it renders.
///
/// Attributes are kept in a `BTreeMap` so rendering iterates them in a
/// repeatable (name-sorted) order. Empty values are legal and are preserved
/// by the save file, but skipped when rendering markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tag {
    pub name: String,
    pub closable: bool,
    pub attributes: BTreeMap<String, String>,
    /// Tag kinds allowed to contain this one. Metadata only, never enforced.
    pub legal_parents: Vec<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>, closable: bool) -> Self {
        Self {
            name: name.into(),
            closable,
            ..Self::default()
        }
    }

    /// Create a text leaf carrying `content`
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(TEXT_TAG, false).with_attribute(TEXT_ATTRIBUTE, content)
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_legal_parent(mut self, parent: impl Into<String>) -> Self {
        self.legal_parents.push(parent.into());
        self
    }

    /// Set an attribute, returning the previous value if there was one
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.attributes.insert(name.into(), value.into())
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn is_text(&self) -> bool {
        self.name == TEXT_TAG
    }

    /// Attributes that would appear in rendered markup, in render order
    pub fn rendered_attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn allows_parent(&self, parent: &str) -> bool {
        self.legal_parents.iter().any(|p| p == parent)
    }
}
