//! Deterministic displacement of a UV sphere into an irregular rocky body.
//!
//! [`displaced_body`] is a pure function of `(seed, params)`: two calls with
//! identical inputs produce bit-identical vertex positions. Each vertex draws
//! exactly one noise value from a [`Xorshift32`] seeded by a position-keyed
//! sub-seed, so the result does not depend on traversal order and coincident
//! pole vertices always move together.

use crate::hash::vertex_subseed;
use crate::mesh::Mesh;
use crate::prng::Xorshift32;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Minimum longitude divisions for a non-degenerate sphere.
pub const MIN_LONGITUDES: u32 = 32;
/// Minimum latitude divisions for a non-degenerate sphere.
pub const MIN_LATITUDES: u32 = 16;
/// Upper tessellation bound, matching common mesh-generator guards.
const MAX_DIVISIONS: u32 = 512;
/// Smallest allowed fractional radius perturbation.
pub const MIN_INTENSITY: f32 = 0.02;
/// Largest allowed fractional radius perturbation; keeps bumps well away
/// from inverting the surface.
pub const MAX_INTENSITY: f32 = 0.12;

/// Largest absolute component of a unit vector pointing along a cube
/// diagonal (1/sqrt(3)); the lower end of the facet-weight ramp.
const DIAGONAL_AXIS_MAX: f32 = 0.577_350_26;

/// Tessellation and displacement parameters for [`displaced_body`].
///
/// All fields are clamped, never rejected: the generator has no failure
/// modes. Two identical `ShapeParams` fed to the same seed produce
/// bit-identical meshes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    /// Radius of the undisplaced sphere.
    pub base_radius: f32,
    /// Segments around the equator (clamped to at least [`MIN_LONGITUDES`]).
    pub longitudes: u32,
    /// Rings from pole to pole (clamped to at least [`MIN_LATITUDES`]).
    pub latitudes: u32,
    /// Maximum fractional radius perturbation, clamped to
    /// [[`MIN_INTENSITY`], [`MAX_INTENSITY`]].
    pub intensity: f32,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            base_radius: 1.0,
            longitudes: 64,
            latitudes: 32,
            intensity: 0.08,
        }
    }
}

impl ShapeParams {
    /// Returns a copy with every field forced into its valid range.
    ///
    /// A non-finite or non-positive radius falls back to 1.0.
    pub fn clamped(&self) -> Self {
        Self {
            base_radius: if self.base_radius.is_finite() && self.base_radius > 0.0 {
                self.base_radius
            } else {
                1.0
            },
            longitudes: self.longitudes.clamp(MIN_LONGITUDES, MAX_DIVISIONS),
            latitudes: self.latitudes.clamp(MIN_LATITUDES, MAX_DIVISIONS),
            intensity: if self.intensity.is_finite() {
                self.intensity.clamp(MIN_INTENSITY, MAX_INTENSITY)
            } else {
                MIN_INTENSITY
            },
        }
    }
}

/// Perturbation weight for a vertex with the given undisplaced unit normal.
///
/// Vertices whose normal points along a coordinate axis get the minimum
/// weight 0.6; vertices on a cube diagonal get the full 1.0. The ramp is
/// linear in the largest absolute normal component, which for a unit vector
/// lies in [1/sqrt(3), 1].
fn facet_weight(normal: Vec3) -> f32 {
    let axis_max = normal.abs().max_element();
    let deviation = ((1.0 - axis_max) / (1.0 - DIAGONAL_AXIS_MAX)).clamp(0.0, 1.0);
    0.6 + 0.4 * deviation
}

/// Generates the displaced body mesh for `seed`.
///
/// Builds a UV sphere from the clamped `params`, scales every vertex
/// radially by `1 + noise * intensity * weight` (noise in [-1, 1], one
/// draw per vertex, weight in [0.6, 1.0]), then recomputes normals from
/// the final topology. Radial scaling rather than an offset along the
/// normal keeps the pole seams well-behaved.
pub fn displaced_body(seed: u32, params: &ShapeParams) -> Mesh {
    let p = params.clamped();
    let mut mesh = Mesh::uv_sphere(p.base_radius, p.longitudes, p.latitudes);
    for position in mesh.positions_mut() {
        let original = *position;
        let noise = Xorshift32::new(vertex_subseed(original, seed)).next_signed_unit();
        let weight = facet_weight(original / p.base_radius);
        *position = original * (1.0 + noise * p.intensity * weight);
    }
    mesh.recompute_normals();
    mesh
}
