//! Catalog of viewable items (image reference + caption)

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub url: String,
    pub details: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no items")]
    Empty,
}

/// Accepted on-disk shapes: a bare array or `{ "items": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Item>),
    Wrapped { items: Vec<Item> },
}

/// Ordered, non-empty, immutable list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { items })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items = match serde_json::from_str(json)? {
            CatalogFile::List(items) => items,
            CatalogFile::Wrapped { items } => items,
        };
        Self::new(items)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        debug!(path = %path.display(), count = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Catalog bundled with the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load from `path` when given, falling back to the built-in catalog.
    /// Returns `None` only if no non-empty catalog is available at all.
    pub fn load_or_builtin(path: Option<&Path>) -> Option<Self> {
        if let Some(path) = path {
            match Self::load(path) {
                Ok(catalog) => return Some(catalog),
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "Failed to load catalog, using built-in")
                }
            }
        }
        match Self::builtin() {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                warn!(error = %e, "Built-in catalog unusable");
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = Item;

    fn index(&self, index: usize) -> &Item {
        &self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_bare_array() {
        let catalog = Catalog::from_json(r#"[{"url":"a.png","details":"A"},{"url":"b.png","details":"B"}]"#)
            .expect("valid catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[1].url, "b.png");
        assert_eq!(catalog[0].details, "A");
    }

    #[test]
    fn parses_wrapped_items() {
        let catalog = Catalog::from_json(r#"{"items":[{"url":"a.png","details":"A"}]}"#)
            .expect("valid catalog");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json(r#"[{"url":"a.png"}]"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn builtin_catalog_is_usable() {
        let catalog = Catalog::builtin().expect("built-in catalog parses");
        assert!(catalog.len() > 1);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"[{{"url":"file:///tmp/x.png","details":"X"}}]"#).expect("write");
        let catalog = Catalog::load(file.path()).expect("load");
        assert_eq!(catalog[0].url, "file:///tmp/x.png");
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.json");
        let catalog = Catalog::load_or_builtin(Some(&missing)).expect("fallback");
        assert_eq!(catalog, Catalog::builtin().expect("built-in"));
    }
}
