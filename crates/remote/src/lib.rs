#![deny(unsafe_code)]
//! Best-effort remote lookups for the rockview viewer.
//!
//! Two independent operations exist at the system boundary: a catalog
//! refresh against the NEO listing service and a per-selection detail
//! lookup against the small-body database. Both are strictly best-effort:
//! every failure (network, status, payload) surfaces as a [`RemoteError`]
//! and the caller falls back to previously-held data. No retries, no
//! user-facing errors.
//!
//! Wire parsing and unit normalization live in [`wire`] and are pure, so
//! they are tested against fixture payloads without any network.

pub mod client;
pub mod error;
pub mod wire;

pub use client::{api_key, fetch_catalog, fetch_detail, DEFAULT_API_KEY};
pub use error::RemoteError;
