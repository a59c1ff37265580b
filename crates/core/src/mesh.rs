//! Triangle mesh storage and UV-sphere construction.
//!
//! A [`Mesh`] stores per-vertex positions and normals plus a `u32` index
//! buffer. [`Mesh::uv_sphere`] builds the fixed tessellation the shape
//! generator displaces; [`Mesh::recompute_normals`] rebuilds normals from
//! the final triangle topology after displacement.

use crate::error::GeometryError;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// An indexed triangle mesh with per-vertex positions and normals.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Creates a mesh from pre-built buffers, validating that positions and
    /// normals have equal length, the index count is a multiple of three,
    /// and every index is in range.
    pub fn from_parts(
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        indices: Vec<u32>,
    ) -> Result<Self, GeometryError> {
        if positions.len() != normals.len() {
            return Err(GeometryError::BufferMismatch {
                positions: positions.len(),
                normals: normals.len(),
            });
        }
        if indices.len() % 3 != 0 {
            return Err(GeometryError::IndexCount(indices.len()));
        }
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
            return Err(GeometryError::IndexOutOfRange {
                index: bad,
                vertex_count: positions.len(),
            });
        }
        Ok(Self {
            positions,
            normals,
            indices,
        })
    }

    /// Builds a UV sphere of `radius` with `longitudes` segments around the
    /// equator and `latitudes` rings from pole to pole.
    ///
    /// The seam column is shared via index wrap-around (no duplicated
    /// vertices at the seam). Each pole is a full ring of coincident
    /// vertices with exact positions `(0, ±radius, 0)`, and the degenerate
    /// triangle of each pole quad is skipped, so the surface is closed.
    ///
    /// Callers are expected to pass already-clamped parameters; this
    /// constructor only guards against the degenerate zero cases.
    pub fn uv_sphere(radius: f32, longitudes: u32, latitudes: u32) -> Self {
        let lon = longitudes.max(3);
        let lat = latitudes.max(2);

        let mut positions = Vec::with_capacity(((lat + 1) * lon) as usize);
        let mut normals = Vec::with_capacity(((lat + 1) * lon) as usize);
        for ring in 0..=lat {
            // Exact pole rows: sin(PI) is not exactly 0 in f32, and any
            // residual ring radius would give pole vertices distinct
            // positions (and distinct position-keyed sub-seeds).
            let (sin_phi, cos_phi) = match ring {
                0 => (0.0, 1.0),
                r if r == lat => (0.0, -1.0),
                r => (r as f32 / lat as f32 * PI).sin_cos(),
            };
            for seg in 0..lon {
                let theta = seg as f32 / lon as f32 * TAU;
                let position = if sin_phi == 0.0 {
                    Vec3::new(0.0, radius * cos_phi, 0.0)
                } else {
                    Vec3::new(
                        radius * sin_phi * theta.cos(),
                        radius * cos_phi,
                        radius * sin_phi * theta.sin(),
                    )
                };
                positions.push(position);
                normals.push(position.normalize());
            }
        }

        let mut indices = Vec::with_capacity((6 * lon * lat) as usize);
        for ring in 0..lat {
            for seg in 0..lon {
                let next = (seg + 1) % lon;
                let i0 = ring * lon + seg;
                let i1 = ring * lon + next;
                let i2 = (ring + 1) * lon + seg;
                let i3 = (ring + 1) * lon + next;
                if ring + 1 < lat {
                    indices.extend_from_slice(&[i0, i3, i2]);
                }
                if ring > 0 {
                    indices.extend_from_slice(&[i0, i1, i3]);
                }
            }
        }

        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Per-vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Mutable access to positions for the displacement pass. Callers that
    /// move vertices must call [`Mesh::recompute_normals`] afterwards.
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    /// Per-vertex outward normals.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Triangle index buffer (three entries per triangle).
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Rebuilds per-vertex normals from the current positions and triangle
    /// topology: geometric (area-weighted) face normals accumulated per
    /// vertex, then normalized. Previous normals are discarded.
    pub fn recompute_normals(&mut self) {
        let mut accum = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let face = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            accum[a] += face;
            accum[b] += face;
            accum[c] += face;
        }
        for (i, n) in accum.into_iter().enumerate() {
            self.normals[i] = n
                .try_normalize()
                .or_else(|| self.positions[i].try_normalize())
                .unwrap_or(Vec3::Y);
        }
    }
}
