/// imdbapi.dev response types for deserialization.
///
/// These structures mirror the parts of the JSON responses we care about.
/// Every field the API may leave out is optional.
use serde::Deserialize;

/// Response of the `/titles/{id}` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct ImdbTitle {
    /// Title type, e.g. `movie`, `tvSeries` or `tvMiniSeries`
    #[serde(rename = "type")]
    pub title_type: String,
}

/// Response of the `/titles/{id}/episodes` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct ImdbEpisodeList {
    #[serde(default)]
    pub episodes: Vec<ImdbEpisode>,
}

/// A single episode entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ImdbEpisode {
    pub episode_number: Option<u32>,
    pub title: Option<String>,
    pub plot: Option<String>,
    pub release_date: Option<ImdbDate>,
    pub rating: Option<ImdbRating>,
}

/// Calendar date as split up by the API.
#[derive(Debug, Deserialize)]
pub(super) struct ImdbDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ImdbRating {
    pub aggregate_rating: Option<f64>,
}
