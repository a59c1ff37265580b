//! Fetch glue for the two remote services.
//!
//! Each function performs one request and hands back either parsed data
//! or a [`RemoteError`]; policy (keep the previous data, never retry,
//! never surface) belongs to the caller.

use crate::error::RemoteError;
use crate::wire::{NeoBrowsePage, SbdbResponse};
use rockview_catalog::{CatalogEntry, DetailOverlay};

/// Public low-rate credential used when no API key is configured.
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Environment variable holding an optional API credential that raises
/// the remote rate limit.
const API_KEY_ENV: &str = "NASA_API_KEY";

const NEO_BROWSE_URL: &str = "https://api.nasa.gov/neo/rest/v1/neo/browse";
const SBDB_URL: &str = "https://ssd-api.jpl.nasa.gov/sbdb.api";

/// Resolves the API credential: `NASA_API_KEY` if set and non-empty,
/// otherwise [`DEFAULT_API_KEY`].
pub fn api_key() -> String {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => key,
        _ => DEFAULT_API_KEY.to_string(),
    }
}

/// Fetches one page of the NEO listing and converts it to catalog entries.
///
/// The caller merges the result into its seed catalog; on error it keeps
/// the catalog it already has.
pub async fn fetch_catalog(
    client: &reqwest::Client,
    api_key: &str,
) -> Result<Vec<CatalogEntry>, RemoteError> {
    log::debug!("refreshing catalog from {NEO_BROWSE_URL}");
    let response = client
        .get(NEO_BROWSE_URL)
        .query(&[("api_key", api_key)])
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        log::warn!("catalog refresh got status {status}; keeping local data");
        return Err(RemoteError::Status(status.as_u16()));
    }
    let page: NeoBrowsePage = response.json().await?;
    Ok(page
        .near_earth_objects
        .into_iter()
        .map(CatalogEntry::from)
        .collect())
}

/// Looks up one body in the small-body database by identifier,
/// designation, or name, returning the enrichment overlay.
pub async fn fetch_detail(
    client: &reqwest::Client,
    query: &str,
) -> Result<DetailOverlay, RemoteError> {
    log::debug!("fetching detail for {query:?} from {SBDB_URL}");
    let response = client
        .get(SBDB_URL)
        .query(&[("sstr", query), ("phys-par", "1")])
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        log::warn!("detail lookup for {query:?} got status {status}; showing entry unmodified");
        return Err(RemoteError::Status(status.as_u16()));
    }
    let detail: SbdbResponse = response.json().await?;
    Ok(DetailOverlay::from(detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    // api_key() reads the process environment, so these tests set and
    // remove the variable around each assertion. They run in one test to
    // avoid racing the environment between threads.
    #[test]
    fn api_key_resolution_order() {
        std::env::remove_var(API_KEY_ENV);
        assert_eq!(api_key(), DEFAULT_API_KEY);

        std::env::set_var(API_KEY_ENV, "");
        assert_eq!(api_key(), DEFAULT_API_KEY);

        std::env::set_var(API_KEY_ENV, "abc123");
        assert_eq!(api_key(), "abc123");

        std::env::remove_var(API_KEY_ENV);
    }
}
