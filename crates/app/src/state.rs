//! The viewer state machine.
//!
//! Selection derives a seed from the entry's display name and regenerates
//! the mesh from scratch — meshes are never patched. Detail enrichment
//! results carry the selection generation they were requested under;
//! results for a superseded selection are discarded rather than allowed
//! to overwrite a newer one.

use crate::texture::Texture;
use rockview_catalog::export::entry_text;
use rockview_catalog::{Catalog, CatalogEntry, DetailOverlay};
use rockview_core::{displaced_body, seed_from_name, Mesh, ShapeParams};

/// The entry currently under inspection, with its derived geometry.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Base entry with any enrichment overlays already applied.
    pub entry: CatalogEntry,
    /// Seed derived from the entry's name; same body, same bumps.
    pub seed: u32,
    /// Generated mesh, owned by this selection and replaced wholesale
    /// whenever the selection changes.
    pub mesh: Mesh,
    /// Monotonic selection counter used to discard stale detail results.
    pub generation: u64,
}

/// Messages that mutate [`ViewerState`].
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the catalog snapshot wholesale.
    SetCatalog(Catalog),
    /// Merge remotely fetched entries into the current snapshot, keyed by
    /// id; existing entries always win.
    MergeCatalog(Vec<CatalogEntry>),
    /// Select an entry by id and regenerate its mesh. Unknown ids are
    /// ignored.
    Select(String),
    /// Drop the current selection.
    ClearSelection,
    /// Apply a detail-enrichment result requested under `generation`.
    /// Stale generations are discarded.
    ApplyDetail {
        overlay: DetailOverlay,
        generation: u64,
    },
    /// Toggle the loading indicator for the in-flight fetches.
    SetLoading(bool),
    /// Install a user-supplied surface texture; unrecognizable bytes keep
    /// the previous texture.
    SetTexture(Vec<u8>),
    /// Remove the surface texture.
    ClearTexture,
}

/// Top-level state for one viewer instance.
#[derive(Debug)]
pub struct ViewerState {
    catalog: Catalog,
    selection: Option<Selection>,
    texture: Option<Texture>,
    loading: bool,
    shape_params: ShapeParams,
    generation: u64,
}

impl ViewerState {
    /// Creates a viewer over `catalog` with nothing selected.
    pub fn new(catalog: Catalog, shape_params: ShapeParams) -> Self {
        Self {
            catalog,
            selection: None,
            texture: None,
            loading: false,
            shape_params,
            generation: 0,
        }
    }

    /// Current catalog snapshot.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Current surface texture, if any.
    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// True while a best-effort fetch is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Formatted text record of the current selection (the clipboard
    /// payload), if anything is selected.
    pub fn selection_text(&self) -> Option<String> {
        self.selection.as_ref().map(|s| entry_text(&s.entry))
    }

    /// Applies one state transition.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::SetCatalog(catalog) => {
                self.catalog = catalog;
            }
            Action::MergeCatalog(entries) => {
                self.catalog = self.catalog.merge(entries);
            }
            Action::Select(id) => {
                let Some(entry) = self.catalog.get(&id) else {
                    log::debug!("select ignored: no entry with id {id:?}");
                    return;
                };
                self.generation += 1;
                let seed = seed_from_name(&entry.name);
                self.selection = Some(Selection {
                    entry: entry.clone(),
                    seed,
                    mesh: displaced_body(seed, &self.shape_params),
                    generation: self.generation,
                });
            }
            Action::ClearSelection => {
                self.selection = None;
            }
            Action::ApplyDetail {
                overlay,
                generation,
            } => {
                let Some(selection) = self.selection.as_mut() else {
                    return;
                };
                if generation != selection.generation {
                    log::debug!(
                        "discarding stale detail result (generation {generation}, current {})",
                        selection.generation
                    );
                    return;
                }
                if !overlay.is_empty() {
                    selection.entry = selection.entry.with_overlay(&overlay);
                }
            }
            Action::SetLoading(loading) => {
                self.loading = loading;
            }
            Action::SetTexture(bytes) => match Texture::from_bytes(bytes) {
                Ok(texture) => self.texture = Some(texture),
                Err(e) => log::warn!("texture rejected, keeping previous: {e}"),
            },
            Action::ClearTexture => {
                self.texture = None;
            }
        }
    }
}
