#![deny(unsafe_code)]
//! Viewer state for the rockview minor-body viewer.
//!
//! Owns the single source of truth the frontends render from: the current
//! catalog snapshot, the selected entry with its generated mesh, the
//! optional surface texture, and the loading flag. All mutation goes
//! through [`ViewerState::update`] with an [`Action`] — there is no other
//! write path.

pub mod obj;
pub mod state;
pub mod texture;

pub use state::{Action, Selection, ViewerState};
pub use texture::{Texture, TextureError};
