//! Embedded seed dataset.
//!
//! The seed catalog ships with the binary so the viewer always has data,
//! with zero network dependency. Remote refreshes merge on top of it and
//! never replace it.

use crate::catalog::Catalog;
use crate::entry::CatalogEntry;
use crate::error::CatalogError;

/// The embedded dataset, checked into the crate as JSON.
const SEED_CATALOG_JSON: &str = include_str!("../data/seed_catalog.json");

/// Parses the embedded seed dataset into a catalog.
///
/// Fails only if the shipped JSON is malformed, which a unit test guards
/// against.
pub fn seed_catalog() -> Result<Catalog, CatalogError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(SEED_CATALOG_JSON)?;
    Catalog::new(entries)
}
