use super::{Node, Tag};
use crate::render::render_page;
use crate::serialization::{DocumentError, RebuildOptions, SaveDocument, flatten, rebuild_with};

/// Everything a save file holds: the tag tree and the page's stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub root: Node,
    pub css: String,
}

impl Page {
    pub fn new(root: Node) -> Self {
        Self {
            root,
            css: String::new(),
        }
    }

    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = css.into();
        self
    }

    /// The skeleton a fresh page starts from: `html > (head > title, body)`
    pub fn default_page() -> Self {
        let root = Node::new(Tag::new("html", true)).with_children([
            Node::new(Tag::new("head", true).with_legal_parent("html"))
                .with_child(Node::new(Tag::new("title", true).with_legal_parent("head"))),
            Node::new(Tag::new("body", true).with_legal_parent("html")),
        ]);
        Self::new(root)
    }

    pub fn to_document(&self) -> SaveDocument {
        SaveDocument {
            tag_tree: flatten(&self.root),
            css_content: self.css.clone(),
        }
    }

    pub fn from_document(
        document: &SaveDocument,
        options: RebuildOptions,
    ) -> Result<Self, DocumentError> {
        let root = rebuild_with(&document.tag_tree, options)?;
        Ok(Self {
            root,
            css: document.css_content.clone(),
        })
    }

    /// Serialize to the pretty-printed save-file format
    pub fn to_json(&self) -> Result<String, DocumentError> {
        self.to_document().to_json_pretty()
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Self::from_json_with(json, RebuildOptions::default())
    }

    pub fn from_json_with(json: &str, options: RebuildOptions) -> Result<Self, DocumentError> {
        let document = SaveDocument::from_json(json)?;
        Self::from_document(&document, options)
    }

    /// Full HTML export, doctype included
    pub fn to_html(&self) -> String {
        render_page(&self.root)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::default_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::FormatError;
    use crate::tests::{record, sample_tree};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_round_trip_keeps_tree_and_css() {
        let page = Page::new(sample_tree()).with_css("body { color: red; }");

        let json = page.to_json().unwrap();
        let loaded = Page::from_json(&json).unwrap();

        assert_eq!(loaded, page);
    }

    #[test]
    fn test_empty_attribute_survives_save_but_not_render() {
        let page = Page::new(sample_tree());
        let loaded = Page::from_json(&page.to_json().unwrap()).unwrap();

        let paragraph = loaded.root.get(5).unwrap();
        assert_eq!(paragraph.tag.attribute("class"), Some(""));
        assert!(loaded.to_html().contains("<p id = \"intro\">\n"));
    }

    #[test]
    fn test_default_page_json() {
        insta::assert_snapshot!(Page::default_page().to_json().unwrap(), @r#"
        {
          "tag_tree": [
            {
              "tag": "html",
              "has_closing_tag": true,
              "legal_parents": [],
              "attributes": [],
              "number_of_children": 2,
              "node_index": 0,
              "parent_index": -1
            },
            {
              "tag": "head",
              "has_closing_tag": true,
              "legal_parents": [
                "html"
              ],
              "attributes": [],
              "number_of_children": 1,
              "node_index": 1,
              "parent_index": 0
            },
            {
              "tag": "title",
              "has_closing_tag": true,
              "legal_parents": [
                "head"
              ],
              "attributes": [],
              "number_of_children": 0,
              "node_index": 2,
              "parent_index": 1
            },
            {
              "tag": "body",
              "has_closing_tag": true,
              "legal_parents": [
                "html"
              ],
              "attributes": [],
              "number_of_children": 0,
              "node_index": 3,
              "parent_index": 0
            }
          ],
          "css_content": ""
        }
        "#);
    }

    #[test]
    fn test_structural_error_surfaces_as_format_error() {
        let json = r#"{"tag_tree": [], "css_content": ""}"#;
        let err = Page::from_json(json).unwrap_err();
        assert!(matches!(err, DocumentError::Format(FormatError::Empty)));
    }

    #[test]
    fn test_long_parent_chain_loads_renders_and_drops() {
        let depth = 200_000;
        let tag_tree = (0..depth)
            .map(|i| {
                let children = usize::from(i + 1 < depth);
                record("div", i, i.checked_sub(1), children)
            })
            .collect();
        let json = SaveDocument {
            tag_tree,
            css_content: String::new(),
        }
        .to_json_pretty()
        .unwrap();

        let page = Page::from_json(&json).unwrap();
        assert_eq!(page.root.depth(), depth);
        let html = page.to_html();
        assert!(html.ends_with("</div>\n"));
        drop(page);
    }

    #[test]
    fn test_default_page_html() {
        assert_eq!(
            Page::default_page().to_html(),
            "<!doctype html>\n<html>\n<head>\n<title>\n</title>\n</head>\n<body>\n</body>\n</html>\n"
        );
    }
}
