//! Catalog file loading.
//!
//! The one place the engine touches the filesystem. Catalogs are a
//! single JSON document with `categories` and `scenarios` arrays;
//! interpretation of the records themselves is entirely the
//! normalizer's job.

use std::path::Path;

use crate::catalog::raw::RawCatalog;
use crate::error::{EthicaError, Result};

/// Read and parse a catalog file into raw records.
pub fn load_file(path: &Path) -> Result<RawCatalog> {
    if !path.exists() {
        return Err(EthicaError::CatalogNotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path)?;
    let catalog: RawCatalog = serde_json::from_str(&raw)?;
    tracing::debug!(
        path = %path.display(),
        categories = catalog.categories.len(),
        scenarios = catalog.scenarios.len(),
        "catalog file loaded"
    );
    Ok(catalog)
}
