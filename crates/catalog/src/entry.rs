//! Catalog entry and enrichment overlay types.
//!
//! Entries are immutable once constructed: enrichment never mutates an
//! entry in place, it produces a new one via [`CatalogEntry::with_overlay`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated historical event attached to a body.
///
/// Event order within an entry is chronological-as-entered; the system
/// never re-sorts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotableEvent {
    pub date: NaiveDate,
    pub event: String,
}

/// One body in the catalog.
///
/// `id` is unique within any catalog snapshot. Optional physical
/// attributes stay `None` when the source data lacks them; display code
/// renders them as an explicit "unknown" rather than treating absence as
/// an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub designation: String,
    #[serde(default)]
    pub diameter_km: Option<f64>,
    #[serde(default)]
    pub absolute_magnitude_h: Option<f64>,
    #[serde(default)]
    pub potentially_hazardous: bool,
    #[serde(default)]
    pub discovery_date: Option<NaiveDate>,
    #[serde(default)]
    pub discoverer: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub notable_events: Vec<NotableEvent>,
}

impl CatalogEntry {
    /// True if `needle` (already lowercased) occurs in the name,
    /// designation, or id, ignoring case.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.designation.to_lowercase().contains(needle)
            || self.id.to_lowercase().contains(needle)
    }

    /// Returns a new entry with non-empty overlay fields replacing the
    /// base fields. Fields absent from the overlay are untouched.
    pub fn with_overlay(&self, overlay: &DetailOverlay) -> CatalogEntry {
        let mut merged = self.clone();
        if let Some(d) = overlay.diameter_km {
            merged.diameter_km = Some(d);
        }
        if let Some(h) = overlay.absolute_magnitude_h {
            merged.absolute_magnitude_h = Some(h);
        }
        if let Some(s) = overlay.summary.as_deref() {
            if !s.is_empty() {
                merged.summary = s.to_owned();
            }
        }
        merged
    }
}

/// Physical parameters returned by the detail lookup, overlaid
/// non-destructively onto a selected entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailOverlay {
    #[serde(default)]
    pub diameter_km: Option<f64>,
    #[serde(default)]
    pub absolute_magnitude_h: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl DetailOverlay {
    /// True if the overlay carries nothing worth applying.
    pub fn is_empty(&self) -> bool {
        self.diameter_km.is_none()
            && self.absolute_magnitude_h.is_none()
            && self.summary.as_deref().map_or(true, str::is_empty)
    }
}
