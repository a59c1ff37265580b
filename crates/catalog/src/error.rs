//! Error types for catalog construction.

use thiserror::Error;

/// Errors produced when building a catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two entries in one snapshot shared an id.
    #[error("duplicate catalog id: {0}")]
    DuplicateId(String),

    /// The embedded or supplied dataset could not be parsed.
    #[error("invalid catalog data: {0}")]
    InvalidData(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::InvalidData(e.to_string())
    }
}
