//! Wire formats for the two remote services.
//!
//! The DTOs here mirror only the fields the viewer consumes; everything
//! else in the payloads is ignored. Conversion into the catalog data
//! model normalizes diameters to kilometers and maps missing fields to
//! `None` — a malformed optional field never becomes an error.

use rockview_catalog::{CatalogEntry, DetailOverlay};
use serde::Deserialize;

/// One page of the NEO browse listing.
#[derive(Debug, Deserialize)]
pub struct NeoBrowsePage {
    #[serde(default)]
    pub near_earth_objects: Vec<NeoRecord>,
}

/// One object from the NEO browse listing.
#[derive(Debug, Deserialize)]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub absolute_magnitude_h: Option<f64>,
    #[serde(default)]
    pub estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
}

/// Estimated diameter ranges, reported per unit.
#[derive(Debug, Deserialize)]
pub struct EstimatedDiameter {
    #[serde(default)]
    pub kilometers: Option<DiameterRange>,
    #[serde(default)]
    pub meters: Option<DiameterRange>,
}

/// A min/max diameter estimate in one unit.
#[derive(Debug, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

impl DiameterRange {
    fn mean(&self) -> f64 {
        (self.estimated_diameter_min + self.estimated_diameter_max) / 2.0
    }
}

impl EstimatedDiameter {
    /// Mean diameter normalized to kilometers, from whichever unit the
    /// source reported.
    pub fn mean_km(&self) -> Option<f64> {
        if let Some(km) = &self.kilometers {
            return Some(km.mean());
        }
        self.meters.as_ref().map(|m| m.mean() / 1000.0)
    }
}

impl From<NeoRecord> for CatalogEntry {
    fn from(record: NeoRecord) -> Self {
        let diameter_km = record.estimated_diameter.as_ref().and_then(EstimatedDiameter::mean_km);
        let designation = record.designation.clone().unwrap_or_else(|| record.name.clone());
        CatalogEntry {
            id: record.id,
            name: record.name,
            designation,
            diameter_km,
            absolute_magnitude_h: record.absolute_magnitude_h,
            potentially_hazardous: record.is_potentially_hazardous_asteroid,
            discovery_date: None,
            discoverer: None,
            summary: String::new(),
            notable_events: Vec::new(),
        }
    }
}

/// Parses a NEO browse payload into catalog entries.
pub fn parse_neo_browse(body: &str) -> Result<Vec<CatalogEntry>, serde_json::Error> {
    let page: NeoBrowsePage = serde_json::from_str(body)?;
    Ok(page.near_earth_objects.into_iter().map(CatalogEntry::from).collect())
}

/// Top level of a small-body database lookup.
#[derive(Debug, Deserialize)]
pub struct SbdbResponse {
    #[serde(default)]
    pub object: Option<SbdbObject>,
    #[serde(default)]
    pub phys_par: Vec<SbdbPhysPar>,
}

/// Object metadata from the small-body database.
#[derive(Debug, Deserialize)]
pub struct SbdbObject {
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub orbit_class: Option<SbdbOrbitClass>,
}

/// Orbit classification.
#[derive(Debug, Deserialize)]
pub struct SbdbOrbitClass {
    #[serde(default)]
    pub name: Option<String>,
}

/// One physical parameter row. Values arrive as strings.
#[derive(Debug, Deserialize)]
pub struct SbdbPhysPar {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl SbdbResponse {
    fn phys_value(&self, name: &str) -> Option<f64> {
        self.phys_par
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.value.as_deref())
            .and_then(|v| v.trim().parse().ok())
    }
}

impl From<SbdbResponse> for DetailOverlay {
    fn from(response: SbdbResponse) -> Self {
        let summary = response
            .object
            .as_ref()
            .and_then(|o| o.orbit_class.as_ref())
            .and_then(|c| c.name.as_deref())
            .map(|class| format!("{class} orbit class"));
        DetailOverlay {
            diameter_km: response.phys_value("diameter"),
            absolute_magnitude_h: response.phys_value("H"),
            summary,
        }
    }
}

/// Parses a small-body detail payload into an enrichment overlay.
pub fn parse_sbdb_detail(body: &str) -> Result<DetailOverlay, serde_json::Error> {
    let response: SbdbResponse = serde_json::from_str(body)?;
    Ok(DetailOverlay::from(response))
}
