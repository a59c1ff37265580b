//! Error types for the geometry core.
//!
//! The shape generator itself has no failure modes (all numeric inputs are
//! clamped); errors here only arise when assembling a [`Mesh`](crate::Mesh)
//! from externally supplied buffers.

use thiserror::Error;

/// Errors produced when constructing a mesh from raw parts.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Position and normal buffers had different lengths.
    #[error("buffer length mismatch: {positions} positions vs {normals} normals")]
    BufferMismatch { positions: usize, normals: usize },

    /// The index buffer length was not a multiple of three.
    #[error("index count {0} is not a multiple of 3")]
    IndexCount(usize),

    /// An index referred to a vertex beyond the end of the position buffer.
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}
