#![deny(unsafe_code)]
//! Catalog data model for the rockview minor-body viewer.
//!
//! Provides `CatalogEntry` (with optional physical attributes and a
//! chronological event list), the non-destructive `DetailOverlay`, the
//! ordered unique-id `Catalog` with merge and search, the embedded seed
//! dataset, and formatted text export of a full record.

pub mod catalog;
pub mod data;
pub mod entry;
pub mod error;
pub mod export;

pub use catalog::Catalog;
pub use entry::{CatalogEntry, DetailOverlay, NotableEvent};
pub use error::CatalogError;
