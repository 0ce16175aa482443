//! Storage layer for books and authors.
//!
//! Two backends sit behind the [`Catalog`] trait:
//!
//! - [`MemoryCatalog`]: fixture-seeded vectors in process memory (`memory:`)
//! - [`DocumentCatalog`]: JSON collection files in a directory (`file:<path>`)
//!
//! [`open_catalog`] picks one from the configured database URL.

mod catalog;
mod document;
pub mod fixtures;
mod ids;
mod memory;

pub use catalog::Catalog;
pub use document::{AUTHORS_COLLECTION, BOOKS_COLLECTION, DocumentCatalog};
pub use ids::IdGenerator;
pub use memory::MemoryCatalog;

use crate::config::{DatabaseUrl, ReadlistConfig};
use crate::error::Result;
use std::path::Path;
use std::sync::Arc;

/// Open the catalog named by `config.readlist.database_url`.
///
/// Relative document-store paths are resolved against `project_root`. An
/// empty document store is seeded with the fixtures when `seed_fixtures` is on.
pub fn open_catalog(config: &ReadlistConfig, project_root: &Path) -> Result<Arc<dyn Catalog>> {
    let ids = IdGenerator::from_settings(&config.readlist);

    match config.database_url()?.resolve(project_root) {
        DatabaseUrl::Memory => {
            tracing::debug!("Using in-memory catalog");
            Ok(Arc::new(MemoryCatalog::with_fixtures(ids)))
        }
        DatabaseUrl::File(path) => {
            let catalog = DocumentCatalog::open(path, ids)?;
            if config.readlist.seed_fixtures {
                catalog.seed(&fixtures::books(), &fixtures::authors())?;
            }
            Ok(Arc::new(catalog))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_memory_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = open_catalog(&ReadlistConfig::default(), temp_dir.path()).unwrap();
        assert_eq!(catalog.books().unwrap().len(), 6);
        assert_eq!(catalog.authors().unwrap().len(), 3);
    }

    #[test]
    fn test_open_document_catalog_relative_to_root() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = ReadlistConfig::default();
        config.readlist.database_url = "file:library".to_string();

        let catalog = open_catalog(&config, temp_dir.path()).unwrap();
        assert_eq!(catalog.books().unwrap().len(), 6);
        assert!(temp_dir.path().join("library/books.json").exists());
    }

    #[test]
    fn test_open_document_catalog_without_seed() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = ReadlistConfig::default();
        config.readlist.database_url = "file:library".to_string();
        config.readlist.seed_fixtures = false;

        let catalog = open_catalog(&config, temp_dir.path()).unwrap();
        assert!(catalog.books().unwrap().is_empty());
    }

    #[test]
    fn test_open_rejects_unknown_scheme() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = ReadlistConfig::default();
        config.readlist.database_url = "mongodb://localhost/books".to_string();
        assert!(open_catalog(&config, temp_dir.path()).is_err());
    }
}
