#![deny(unsafe_code)]
//! WASM bindings for the rockview viewer.
//!
//! Exposes the viewer state machine to a browser page. The page owns the
//! render loop, the camera, and the two best-effort fetches; results come
//! back in through [`Viewer::merge_catalog_json`] and
//! [`Viewer::apply_detail_json`]. Mesh buffers cross the boundary as flat
//! arrays ready for upload.

use rockview_app::{Action, ViewerState};
use rockview_catalog::data::seed_catalog;
use rockview_catalog::{CatalogEntry, DetailOverlay};
use rockview_core::ShapeParams;
use wasm_bindgen::prelude::*;

/// A viewer instance over the embedded seed catalog.
#[wasm_bindgen]
pub struct Viewer {
    state: ViewerState,
}

#[wasm_bindgen]
impl Viewer {
    /// Creates a viewer preloaded with the embedded seed catalog.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Viewer, JsError> {
        let catalog = seed_catalog().map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Viewer {
            state: ViewerState::new(catalog, ShapeParams::default()),
        })
    }

    /// Number of entries in the current catalog snapshot.
    pub fn entry_count(&self) -> usize {
        self.state.catalog().len()
    }

    /// Entries matching a case-insensitive substring query, as JSON.
    pub fn search_json(&self, query: &str) -> Result<String, JsError> {
        let hits = self.state.catalog().search(query);
        serde_json::to_string(&hits).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Merges a fetched NEO-style entry list (JSON array of entries) into
    /// the catalog. A malformed payload is dropped silently, keeping the
    /// current snapshot.
    pub fn merge_catalog_json(&mut self, json: &str) {
        if let Ok(entries) = serde_json::from_str::<Vec<CatalogEntry>>(json) {
            self.state.update(Action::MergeCatalog(entries));
        }
    }

    /// Selects an entry by id and regenerates its mesh. Returns false for
    /// unknown ids.
    pub fn select(&mut self, id: &str) -> bool {
        self.state.update(Action::Select(id.to_string()));
        self.state
            .selection()
            .map_or(false, |s| s.entry.id == id)
    }

    /// Generation counter of the current selection; pass it back with the
    /// detail result so stale responses can be discarded.
    pub fn selection_generation(&self) -> Option<u64> {
        self.state.selection().map(|s| s.generation)
    }

    /// Applies a detail-enrichment overlay (JSON) requested under
    /// `generation`. Malformed payloads and stale generations are dropped.
    pub fn apply_detail_json(&mut self, json: &str, generation: u64) {
        if let Ok(overlay) = serde_json::from_str::<DetailOverlay>(json) {
            self.state.update(Action::ApplyDetail {
                overlay,
                generation,
            });
        }
    }

    /// The selected entry as JSON, if anything is selected.
    pub fn selection_json(&self) -> Result<Option<String>, JsError> {
        self.state
            .selection()
            .map(|s| serde_json::to_string(&s.entry).map_err(|e| JsError::new(&e.to_string())))
            .transpose()
    }

    /// Formatted text record of the selection for the clipboard export.
    pub fn selection_text(&self) -> Option<String> {
        self.state.selection_text()
    }

    /// Flat xyz positions of the selected body's mesh.
    pub fn positions(&self) -> Vec<f32> {
        self.state.selection().map_or_else(Vec::new, |s| {
            s.mesh
                .positions()
                .iter()
                .flat_map(|p| [p.x, p.y, p.z])
                .collect()
        })
    }

    /// Flat xyz normals of the selected body's mesh.
    pub fn normals(&self) -> Vec<f32> {
        self.state.selection().map_or_else(Vec::new, |s| {
            s.mesh
                .normals()
                .iter()
                .flat_map(|n| [n.x, n.y, n.z])
                .collect()
        })
    }

    /// Triangle indices of the selected body's mesh.
    pub fn indices(&self) -> Vec<u32> {
        self.state
            .selection()
            .map_or_else(Vec::new, |s| s.mesh.indices().to_vec())
    }

    /// Installs user-supplied texture bytes; unrecognizable bytes keep the
    /// previous texture.
    pub fn set_texture(&mut self, bytes: Vec<u8>) {
        self.state.update(Action::SetTexture(bytes));
    }

    /// Removes the surface texture.
    pub fn clear_texture(&mut self) {
        self.state.update(Action::ClearTexture);
    }

    /// Sets the loading indicator.
    pub fn set_loading(&mut self, loading: bool) {
        self.state.update(Action::SetLoading(loading));
    }

    /// True while a fetch is in flight.
    pub fn loading(&self) -> bool {
        self.state.loading()
    }
}
