/// imdbapi.dev metadata provider implementation.
use super::imdbapi_types::{ImdbDate, ImdbEpisode, ImdbEpisodeList, ImdbTitle};
use super::{Episode, MetadataProvider, MetadataRetrievalError};
use crate::link_validator::TitleId;
use chrono::{Local, NaiveDate};
use log::{debug, warn};
use serde::de::DeserializeOwned;

/// Base URL of the public imdbapi.dev service
pub const DEFAULT_API_URL: &str = "https://api.imdbapi.dev";

/// Title types that count as a show
const SERIES_TYPES: &[&str] = &["tvSeries", "tvMiniSeries"];

const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Metadata provider for the imdbapi.dev API.
///
/// This provider fetches title information from https://api.imdbapi.dev
/// using the `titles` and `titles/{id}/episodes` endpoints.
pub struct ImdbApiProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl ImdbApiProvider {
    /// Creates a provider talking to the public imdbapi.dev service.
    pub fn new() -> Result<Self, MetadataRetrievalError> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Creates a provider talking to an arbitrary API compatible service.
    pub fn with_base_url(base_url: &str) -> Result<Self, MetadataRetrievalError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|e| MetadataRetrievalError::RequestError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issues a GET request and decodes the JSON body.
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        title_id: &TitleId,
    ) -> Result<T, MetadataRetrievalError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| MetadataRetrievalError::RequestError(e.to_string()))?;

        if response.status() == 404 {
            return Err(MetadataRetrievalError::TitleNotFound(title_id.to_string()));
        }

        if !response.status().is_success() {
            return Err(MetadataRetrievalError::RequestError(format!(
                "HTTP {} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json()
            .map_err(|e| MetadataRetrievalError::ParseError(e.to_string()))
    }
}

impl MetadataProvider for ImdbApiProvider {
    fn is_series(&self, title_id: &TitleId) -> Result<bool, MetadataRetrievalError> {
        let title: ImdbTitle = self.get_json(&format!("/titles/{}", title_id), title_id)?;
        debug!("{} has type {}", title_id, title.title_type);

        Ok(is_series_type(&title.title_type))
    }

    fn fetch_episodes(&self, title_id: &TitleId) -> Result<Vec<Episode>, MetadataRetrievalError> {
        let list: ImdbEpisodeList =
            self.get_json(&format!("/titles/{}/episodes", title_id), title_id)?;
        debug!("{} lists {} episode(s)", title_id, list.episodes.len());

        Ok(released_episodes(list.episodes, Local::now().date_naive()))
    }
}

fn is_series_type(title_type: &str) -> bool {
    SERIES_TYPES.contains(&title_type)
}

fn release_date(date: &ImdbDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year?, date.month?, date.day?)
}

/// Converts the API listing into released episodes.
///
/// Entries without a usable release date or episode number are skipped.
/// The first entry released after `today` ends the listing, everything
/// behind it is ignored as well.
fn released_episodes(entries: Vec<ImdbEpisode>, today: NaiveDate) -> Vec<Episode> {
    let mut episodes = Vec::new();

    for entry in entries {
        let Some(released) = entry.release_date.as_ref().and_then(release_date) else {
            continue;
        };

        if released > today {
            debug!("Stopping at episode released on {}", released);
            break;
        }

        let Some(number) = entry.episode_number else {
            warn!(
                "Skipping episode without number: {}",
                entry.title.as_deref().unwrap_or("<untitled>")
            );
            continue;
        };

        episodes.push(Episode {
            number,
            title: entry.title.unwrap_or_default(),
            plot: entry.plot.unwrap_or_default(),
            rating: entry
                .rating
                .and_then(|r| r.aggregate_rating)
                .unwrap_or_default(),
        });
    }

    episodes
}
