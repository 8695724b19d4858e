//! Product catalog provider.
//!
//! The home page renders whatever [`CatalogState`] it is handed. Loading
//! runs as a command off the UI loop, so the loading state is visible until
//! [`Msg::CatalogLoaded`](crate::messages::Msg::CatalogLoaded) arrives.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Catalog bundled with the binary.
const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

/// A product rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score out of five.
    pub rate: f64,
    /// Number of ratings.
    pub count: u32,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub rating: Rating,
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// The catalog compiled into the binary.
    #[default]
    Bundled,
    /// A JSON array of products on disk.
    File(PathBuf),
}

impl CatalogSource {
    /// Source for an optional `--catalog` path.
    #[must_use]
    pub fn from_path(path: Option<&Path>) -> Self {
        path.map_or(Self::Bundled, |p| Self::File(p.to_path_buf()))
    }
}

/// Catalog loading failure.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not a JSON array of products.
    #[error("catalog {origin} is not a valid product list: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load products from `source`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_catalog(source: &CatalogSource) -> Result<Vec<Product>, CatalogError> {
    let (origin, raw) = match source {
        CatalogSource::Bundled => ("bundled catalog".to_string(), BUNDLED_CATALOG.to_string()),
        CatalogSource::File(path) => {
            let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
                path: path.clone(),
                source,
            })?;
            (path.display().to_string(), raw)
        }
    };

    let products: Vec<Product> =
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            origin: origin.clone(),
            source,
        })?;
    debug!(catalog.origin = %origin, catalog.items = products.len(), "Catalog loaded");
    Ok(products)
}

/// Loading state consumed by the home page.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::loading()
    }
}

impl CatalogState {
    /// Nothing loaded yet.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Finished state from a load result.
    #[must_use]
    pub fn from_result(result: Result<Vec<Product>, String>) -> Self {
        match result {
            Ok(items) => Self {
                items,
                loading: false,
                error: None,
            },
            Err(error) => {
                warn!(error = %error, "Catalog unavailable");
                Self {
                    items: Vec::new(),
                    loading: false,
                    error: Some(error),
                }
            }
        }
    }

    /// Load synchronously (headless rendering).
    #[must_use]
    pub fn load(source: &CatalogSource) -> Self {
        Self::from_result(load_catalog(source).map_err(|err| err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses() {
        let products = load_catalog(&CatalogSource::Bundled).unwrap();
        assert!(products.len() > 12, "needs more items than any featured limit");
        assert!(products.iter().all(|p| !p.title.is_empty()));
    }

    #[test]
    fn file_catalog_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"[{"id":1,"title":"Mug","description":"Holds coffee","price":4.5,
                "image":"mug.png","category":"kitchen","rating":{"rate":4.2,"count":9}}]"#,
        )
        .unwrap();

        let products = load_catalog(&CatalogSource::File(path)).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].rating.count, 9);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load_catalog(&CatalogSource::File("/nonexistent/catalog.json".into())).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "{\"not\": \"a list\"}").unwrap();
        let err = load_catalog(&CatalogSource::File(path)).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains("not a valid product list"));
    }

    #[test]
    fn state_transitions() {
        let state = CatalogState::default();
        assert!(state.loading);

        let loaded = CatalogState::from_result(Ok(Vec::new()));
        assert!(!loaded.loading);
        assert!(loaded.error.is_none());

        let failed = CatalogState::from_result(Err("offline".into()));
        assert!(!failed.loading);
        assert_eq!(failed.error.as_deref(), Some("offline"));
    }

    #[test]
    fn source_from_path() {
        assert_eq!(CatalogSource::from_path(None), CatalogSource::Bundled);
        assert_eq!(
            CatalogSource::from_path(Some(Path::new("x.json"))),
            CatalogSource::File(PathBuf::from("x.json"))
        );
    }
}
