//! IMDb link validation
//!
//! This module turns a user supplied IMDb page link into the title identifier
//! used by the metadata API. Anything that does not look like a title page
//! is rejected without further explanation.

use std::fmt;
use url::Url;

/// Host every accepted link has to point to
const IMDB_HOST: &str = "www.imdb.com";

/// Prefix of every IMDb title identifier
const TITLE_ID_PREFIX: &str = "tt";

/// Minimum number of digits following the prefix
const MIN_TITLE_DIGITS: usize = 7;

/// A validated IMDb title identifier, e.g. `tt0903747`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TitleId(String);

impl TitleId {
    /// Returns the identifier as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks whether the given segment is shaped like a title identifier
    fn is_valid(segment: &str) -> bool {
        match segment.strip_prefix(TITLE_ID_PREFIX) {
            Some(digits) => {
                digits.len() >= MIN_TITLE_DIGITS && digits.chars().all(|c| c.is_ascii_digit())
            }
            None => false,
        }
    }
}

impl fmt::Display for TitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the title identifier from an IMDb title page link
///
/// A link is accepted if and only if its host is `www.imdb.com`, the first
/// path segment is `title` and the second one is `tt` followed by at least
/// seven digits. Query strings and fragments are ignored.
///
/// # Returns
///
/// The title identifier, or `None` if the link is not a valid title page link.
///
/// # Examples
///
/// ```
/// use bingewatcher::title_id_from_link;
///
/// let id = title_id_from_link("https://www.imdb.com/title/tt0903747/").unwrap();
/// assert_eq!(id.as_str(), "tt0903747");
/// assert!(title_id_from_link("https://www.imdb.com/name/nm0186505/").is_none());
/// ```
pub fn title_id_from_link(link: &str) -> Option<TitleId> {
    let parsed = Url::parse(link.trim()).ok()?;

    if parsed.host_str() != Some(IMDB_HOST) {
        return None;
    }

    let mut segments = parsed.path_segments()?;
    if segments.next() != Some("title") {
        return None;
    }

    let candidate = segments.next().filter(|s| !s.is_empty())?;
    if !TitleId::is_valid(candidate) {
        return None;
    }

    Some(TitleId(candidate.to_string()))
}

/// Renders the canonical title page link for an identifier
pub fn canonical_link(title_id: &TitleId) -> String {
    format!("https://{}/title/{}/", IMDB_HOST, title_id)
}
