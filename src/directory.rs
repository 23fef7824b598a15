// SPDX-License-Identifier: MPL-2.0
//! Client for the region directory service.
//!
//! The directory is queried exactly once per application start. Its result is
//! kept as a single tagged status so the loading, error, and ready conditions
//! can never overlap.

use crate::error::{DirectoryError, Error, Result};
use serde::Deserialize;

/// A selectable region as returned by the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
}

/// Wire shape of the listing endpoint: `{ "data": [ {id, name}, ... ] }`.
/// The backend sends extra per-region fields (centroid coordinates); serde
/// ignores them. A body without `data` is an empty listing, not an error.
#[derive(Debug, Deserialize)]
struct RegionListing {
    #[serde(default)]
    data: Vec<Region>,
}

/// Outcome of the one-shot directory fetch.
///
/// Transitions are `Loading -> Ready` or `Loading -> Error`, applied through
/// [`DirectoryStatus::settle`]; once settled the status never changes again.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DirectoryStatus {
    #[default]
    Loading,
    Ready(Vec<Region>),
    Error(DirectoryError),
}

impl DirectoryStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, DirectoryStatus::Loading)
    }

    /// Applies the fetch outcome. A no-op once the status has settled, so a
    /// straggler result can never overwrite an earlier one.
    pub fn settle(&mut self, outcome: Result<Vec<Region>>) {
        if self.is_settled() {
            return;
        }
        *self = match outcome {
            Ok(regions) => DirectoryStatus::Ready(regions),
            Err(Error::Directory(err)) => DirectoryStatus::Error(err),
            Err(other) => DirectoryStatus::Error(DirectoryError::Transport(other.to_string())),
        };
    }
}

/// Decodes a region listing body.
pub fn parse_listing(body: &str) -> Result<Vec<Region>> {
    let listing: RegionListing = serde_json::from_str(body)?;
    Ok(listing.data)
}

/// Fetches the region listing from `endpoint`.
///
/// One GET request, no retries. A non-success HTTP status is reported as an
/// error rather than an empty listing.
pub async fn fetch_regions(endpoint: String) -> Result<Vec<Region>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("TerraMap/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client.get(&endpoint).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Directory(DirectoryError::Status(status.as_u16())));
    }

    let body = response.text().await?;
    parse_listing(&body)
}
