use crate::models::{CatalogError, Node, Page, TagCatalog};
use crate::render::render_page;
use crate::serialization::{DocumentError, RebuildOptions};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid save file {path}: {source}")]
    Document {
        path: PathBuf,
        source: DocumentError,
    },
    #[error("Invalid tag catalog {path}: {source}")]
    Catalog {
        path: PathBuf,
        source: CatalogError,
    },
}

/// File names used when exporting a page as a small static site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    pub index_file_name: String,
    pub css_file_name: String,
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            index_file_name: "index.html".to_string(),
            css_file_name: "home.css".to_string(),
        }
    }
}

/// Where [`export_site`] put things
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedSite {
    pub index_path: PathBuf,
    pub css_path: PathBuf,
    pub images_dir: PathBuf,
}

pub const CSS_DIR: &str = "css";
pub const IMAGES_DIR: &str = "images";

/// Read a whole file as text
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Truncate a file to zero length
pub fn clear_file(path: &Path) -> Result<(), IoError> {
    write_file(path, "")
}

/// Save a page in the JSON save-file format
pub fn save_page(path: &Path, page: &Page) -> Result<(), IoError> {
    let json = page.to_json().map_err(|source| IoError::Document {
        path: path.to_path_buf(),
        source,
    })?;
    write_file(path, &json)?;
    log::debug!("saved page to {}", path.display());
    Ok(())
}

pub fn load_page(path: &Path) -> Result<Page, IoError> {
    load_page_with(path, RebuildOptions::default())
}

pub fn load_page_with(path: &Path, options: RebuildOptions) -> Result<Page, IoError> {
    let json = read_file(path)?;
    match Page::from_json_with(&json, options) {
        Ok(page) => {
            log::debug!("loaded page from {}", path.display());
            Ok(page)
        }
        Err(source) => {
            log::warn!("rejected save file {}: {source}", path.display());
            Err(IoError::Document {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Write the doctype declaration and the rendered tree to `path`
pub fn write_html(path: &Path, root: &Node) -> Result<(), IoError> {
    write_file(path, &render_page(root))
}

/// Copy stylesheet text to `path` unchanged
pub fn export_css(path: &Path, css: &str) -> Result<(), IoError> {
    write_file(path, css)
}

/// Export a page as `dir/<index>`, `dir/css/<stylesheet>` and an empty
/// `dir/images/` directory, creating whatever is missing.
pub fn export_site(dir: &Path, page: &Page, layout: &SiteLayout) -> Result<ExportedSite, IoError> {
    let site = ExportedSite {
        index_path: dir.join(&layout.index_file_name),
        css_path: dir.join(CSS_DIR).join(&layout.css_file_name),
        images_dir: dir.join(IMAGES_DIR),
    };

    write_html(&site.index_path, &page.root)?;
    export_css(&site.css_path, &page.css)?;
    fs::create_dir_all(&site.images_dir).map_err(IoError::Io)?;

    log::debug!("exported page to {}", dir.display());
    Ok(site)
}

pub fn load_catalog(path: &Path) -> Result<TagCatalog, IoError> {
    let json = read_file(path)?;
    TagCatalog::from_json(&json).map_err(|source| IoError::Catalog {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::FormatError;
    use crate::tests::{create_test_dir, create_test_file, sample_tree};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_and_load_page() {
        let dir = create_test_dir();
        let path = dir.path().join("site.json");
        let page = Page::new(sample_tree()).with_css("p { margin: 0; }");

        save_page(&path, &page).unwrap();
        let loaded = load_page(&path).unwrap();

        assert_eq!(loaded, page);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = create_test_dir();
        let result = load_page(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_load_inconsistent_tree_reports_path() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "broken.json", r#"{"tag_tree": []}"#);

        let err = load_page(&path).unwrap_err();
        assert!(matches!(
            &err,
            IoError::Document {
                source: DocumentError::Format(FormatError::Empty),
                ..
            }
        ));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_load_with_child_count_check_disabled() {
        let dir = create_test_dir();
        let json = r#"{"tag_tree": [
            {"tag": "html", "has_closing_tag": true, "legal_parents": [], "attributes": [],
             "number_of_children": 5, "node_index": 0, "parent_index": -1}
        ], "css_content": ""}"#;
        let path = create_test_file(&dir, "loose.json", json);

        assert!(load_page(&path).is_err());
        let options = RebuildOptions {
            verify_child_counts: false,
        };
        let page = load_page_with(&path, options).unwrap();
        assert!(page.root.children.is_empty());
    }

    #[test]
    fn test_write_html() {
        let dir = create_test_dir();
        let path = dir.path().join("out/index.html");

        write_html(&path, &sample_tree()).unwrap();

        let html = read_file(&path).unwrap();
        assert!(html.starts_with("<!doctype html>\n<html>\n"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_export_site_layout() {
        let dir = create_test_dir();
        let page = Page::default_page().with_css("body { margin: 0; }");

        let site = export_site(dir.path(), &page, &SiteLayout::default()).unwrap();

        assert_eq!(site.index_path, dir.path().join("index.html"));
        assert_eq!(site.css_path, dir.path().join("css").join("home.css"));
        assert!(site.images_dir.is_dir());
        assert_eq!(read_file(&site.index_path).unwrap(), page.to_html());
        assert_eq!(read_file(&site.css_path).unwrap(), "body { margin: 0; }");
    }

    #[test]
    fn test_export_site_overwrites_previous_export() {
        let dir = create_test_dir();
        let layout = SiteLayout {
            index_file_name: "page.html".to_string(),
            css_file_name: "style.css".to_string(),
        };

        export_site(dir.path(), &Page::new(sample_tree()), &layout).unwrap();
        let site = export_site(dir.path(), &Page::default_page(), &layout).unwrap();

        assert_eq!(
            read_file(&site.index_path).unwrap(),
            Page::default_page().to_html()
        );
        assert_eq!(read_file(&site.css_path).unwrap(), "");
    }

    #[test]
    fn test_clear_file() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "home.css", "h1 { color: blue; }");

        clear_file(&path).unwrap();

        assert_eq!(read_file(&path).unwrap(), "");
    }

    #[test]
    fn test_load_catalog() {
        let dir = create_test_dir();
        let path = create_test_file(
            &dir,
            "tags.json",
            r#"{"tags": [{"tag": "a", "has_closing_tag": "true",
                "attributes": ["href"], "legal_parents": ["p"]}]}"#,
        );

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.can_contain("p", "a"));
    }

    #[test]
    fn test_load_malformed_catalog() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "tags.json", "{\"tags\": 3}");

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, IoError::Catalog { .. }));
    }
}
