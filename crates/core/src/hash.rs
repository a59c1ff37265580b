//! Deterministic hashing for seeds and per-vertex sub-seeds.
//!
//! Two fixed hash functions live here:
//!
//! - [`seed_from_name`]: 32-bit FNV-1a over a display name, so re-selecting
//!   the same catalog entry reproduces the same body shape across sessions.
//! - [`vertex_subseed`]: a multiply-xor mix over the bit patterns of a
//!   vertex's *original, undisplaced* position, folded with the global seed.
//!   Keyed by position rather than vertex index because index order depends
//!   on how a tessellator enumerates the sphere; positions are the stable
//!   identity of a vertex.

use glam::Vec3;

/// FNV-1a 32-bit offset basis. An empty name hashes to exactly this value.
pub const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime.
const FNV_PRIME: u32 = 0x0100_0193;

/// Maps a display name (or any string identity) to a 32-bit seed.
///
/// Standard FNV-1a: each byte is xor-folded into the state and multiplied
/// by the FNV prime. Same string always yields the same seed; the empty
/// string yields [`FNV_OFFSET_BASIS`].
pub fn seed_from_name(name: &str) -> u32 {
    name.bytes().fold(FNV_OFFSET_BASIS, |h, b| {
        (h ^ u32::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// One murmur3-style mixing round folding a 32-bit word into the state.
fn mix(h: u32, word: u32) -> u32 {
    let k = word
        .wrapping_mul(0xCC9E_2D51)
        .rotate_left(15)
        .wrapping_mul(0x1B87_3593);
    (h ^ k).rotate_left(13).wrapping_mul(5).wrapping_add(0xE654_6B64)
}

/// Derives a per-vertex sub-seed from an undisplaced position and the
/// global seed.
///
/// Folds the IEEE-754 bit patterns of x, y, z (in that fixed coordinate
/// order) into the seed with [`mix`], then applies the murmur3 finalizer.
/// The result depends only on the position bits and the seed — never on
/// traversal order, direction, or tessellation index — so coincident
/// vertices (the pole rings of a UV sphere) always displace identically.
pub fn vertex_subseed(position: Vec3, seed: u32) -> u32 {
    let mut h = seed;
    h = mix(h, position.x.to_bits());
    h = mix(h, position.y.to_bits());
    h = mix(h, position.z.to_bits());
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^ (h >> 16)
}
