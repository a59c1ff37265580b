//! Ordered catalog snapshot with unique ids, merge, and search.

use crate::entry::CatalogEntry;
use crate::error::CatalogError;
use std::collections::HashSet;

/// An ordered snapshot of catalog entries with unique ids.
///
/// Snapshots are immutable: [`Catalog::merge`] returns a new catalog
/// rather than mutating in place, so holders of the old snapshot are
/// never surprised.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids within the snapshot.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.clone()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a new catalog with `incoming` entries appended, keyed by id.
    ///
    /// Existing entries are retained verbatim and keep their order; an
    /// incoming entry whose id already exists (or repeats within
    /// `incoming`) is dropped, never overwriting. Merging a list that
    /// fully duplicates the catalog is therefore a no-op.
    pub fn merge(&self, incoming: Vec<CatalogEntry>) -> Catalog {
        let mut seen: HashSet<String> = self.entries.iter().map(|e| e.id.clone()).collect();
        let mut entries = self.entries.clone();
        for entry in incoming {
            if seen.insert(entry.id.clone()) {
                entries.push(entry);
            }
        }
        Catalog { entries }
    }

    /// Case-insensitive substring search over name, designation, and id.
    ///
    /// An empty query matches every entry.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let needle = query.to_lowercase();
        self.entries.iter().filter(|e| e.matches(&needle)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, designation: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.into(),
            name: name.into(),
            designation: designation.into(),
            diameter_km: None,
            absolute_magnitude_h: None,
            potentially_hazardous: false,
            discovery_date: None,
            discoverer: None,
            summary: String::new(),
            notable_events: Vec::new(),
        }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            entry("433", "433 Eros", "A898 PA"),
            entry("99942", "99942 Apophis", "2004 MN4"),
            entry("101955", "101955 Bennu", "1999 RQ36"),
        ])
        .unwrap()
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![entry("1", "a", "x"), entry("1", "b", "y")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn get_finds_by_id() {
        let c = sample();
        assert_eq!(c.get("99942").unwrap().name, "99942 Apophis");
        assert!(c.get("555").is_none());
    }

    #[test]
    fn merge_appends_only_new_ids() {
        let c = sample();
        let merged = c.merge(vec![
            entry("433", "433 Eros (remote)", "A898 PA"),
            entry("4", "4 Vesta", "A807 FA"),
        ]);
        assert_eq!(merged.len(), 4);
        // Pre-existing entry not overwritten by the remote duplicate.
        assert_eq!(merged.get("433").unwrap().name, "433 Eros");
        assert_eq!(merged.entries().last().unwrap().id, "4");
    }

    #[test]
    fn merge_of_full_duplicates_is_identity() {
        let c = sample();
        let duplicates = c.entries().to_vec();
        let merged = c.merge(duplicates);
        assert_eq!(merged, c);
    }

    #[test]
    fn merge_preserves_existing_order() {
        let c = sample();
        let merged = c.merge(vec![entry("4", "4 Vesta", "A807 FA")]);
        let ids: Vec<_> = merged.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["433", "99942", "101955", "4"]);
    }

    #[test]
    fn merge_drops_duplicates_within_incoming() {
        let c = sample();
        let merged = c.merge(vec![
            entry("4", "4 Vesta", "A807 FA"),
            entry("4", "4 Vesta again", "A807 FA"),
        ]);
        assert_eq!(merged.len(), 4);
        assert_eq!(merged.get("4").unwrap().name, "4 Vesta");
    }

    #[test]
    fn merge_does_not_touch_the_original_snapshot() {
        let c = sample();
        let before = c.clone();
        let _ = c.merge(vec![entry("4", "4 Vesta", "A807 FA")]);
        assert_eq!(c, before);
    }

    #[test]
    fn search_is_case_insensitive() {
        let c = sample();
        let hits = c.search("EROS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "433");
    }

    #[test]
    fn search_matches_designation_and_id() {
        let c = sample();
        assert_eq!(c.search("mn4").len(), 1);
        assert_eq!(c.search("1019")[0].id, "101955");
    }

    #[test]
    fn empty_query_matches_everything() {
        let c = sample();
        assert_eq!(c.search("").len(), c.len());
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        let c = sample();
        assert!(c.search("zzz").is_empty());
    }
}
