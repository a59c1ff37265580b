#![deny(unsafe_code)]
//! Core geometry for the rockview minor-body viewer.
//!
//! Provides the deterministic shape pipeline: `Xorshift32` PRNG,
//! name/position hashing (`seed_from_name`, `vertex_subseed`), the `Mesh`
//! type with UV-sphere construction and normal recomputation, and the
//! `displaced_body` generator that turns a seed into an irregular rocky
//! surface. No I/O anywhere in this crate.

pub mod error;
pub mod hash;
pub mod mesh;
pub mod prng;
pub mod shape;

pub use error::GeometryError;
pub use hash::{seed_from_name, vertex_subseed};
pub use mesh::Mesh;
pub use prng::Xorshift32;
pub use shape::{displaced_body, ShapeParams};
