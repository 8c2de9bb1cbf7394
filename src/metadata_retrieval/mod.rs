/// Data structures and traits for TV series metadata retrieval.
///
/// This module provides the episode record returned by a metadata source and
/// the trait every metadata source implements. The only real implementation
/// talks to the public imdbapi.dev JSON API.
mod imdbapi;
mod imdbapi_types;

pub use imdbapi::{DEFAULT_API_URL, ImdbApiProvider};

use crate::link_validator::TitleId;
use thiserror::Error;

/// Errors that can occur during metadata retrieval operations.
#[derive(Debug, Error)]
pub enum MetadataRetrievalError {
    /// Request to the metadata provider failed
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Failed to parse the provider's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// The requested title was not found
    #[error("Title not found: {0}")]
    TitleNotFound(String),
}

/// Represents a single released episode of a TV series.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    /// The episode number
    pub number: u32,
    /// The episode title (empty if the provider has none)
    pub title: String,
    /// Plot summary (empty if the provider has none)
    pub plot: String,
    /// Aggregated user rating (0.0 if unrated)
    pub rating: f64,
}

/// Trait for metadata providers that can fetch TV series information.
///
/// Both operations are plain request/response calls without any caching or
/// retrying. Tests substitute a fixed fixture for the network backed
/// implementation.
pub trait MetadataProvider {
    /// Checks whether the title is a series (as opposed to a movie or special).
    fn is_series(&self, title_id: &TitleId) -> Result<bool, MetadataRetrievalError>;

    /// Fetches the already released episodes of a series.
    ///
    /// Episodes without a release date are skipped. Processing stops at the
    /// first episode released after today, so the result never contains
    /// anything that follows it in the provider's listing.
    ///
    /// # Returns
    ///
    /// The episodes in the order the provider lists them
    fn fetch_episodes(&self, title_id: &TitleId) -> Result<Vec<Episode>, MetadataRetrievalError>;
}
