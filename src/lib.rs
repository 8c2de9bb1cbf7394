//! bingewatcher - Keep track of the tv shows you are watching
//!
//! This library provides the core functionality behind the `bingewatcher`
//! command: validating IMDb links, fetching released episodes from the
//! metadata API and keeping a local catalog of shows together with the
//! episodes that have not been watched yet.

mod catalog_store;
mod config;
mod episode_sync;
mod link_validator;
mod metadata_retrieval;

use catalog_store::queries;
use log::info;
use thiserror::Error;

// Re-export error types
pub use catalog_store::StoreError;
pub use config::ConfigError;
pub use metadata_retrieval::MetadataRetrievalError;

pub use catalog_store::{CatalogStore, NewShow, PendingEpisode, Show, Status, UnknownStatus};
pub use config::{Settings, default_database_path};
pub use link_validator::{TitleId, canonical_link, title_id_from_link};
pub use metadata_retrieval::{DEFAULT_API_URL, Episode, ImdbApiProvider, MetadataProvider};

/// Highest rating a show can be given
pub const MAX_RATING: f64 = 10.0;

/// Progress event emitted while a command runs
///
/// These events allow library users to give feedback about the slower
/// steps of a command without the library printing anything itself.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// Asking the metadata API about a title
    FetchingMetadata { title_id: String },

    /// Released episodes were fetched
    EpisodesFetched { count: usize },

    /// Pending episodes were stored for a show
    PendingEpisodesStored { show_name: String, count: usize },

    /// Watched pending episodes were removed from a show
    PendingEpisodesPruned { show_name: String, count: usize },
}

/// Top-level error type for bingewatcher operations
#[derive(Debug, Error)]
pub enum BingeWatcherError {
    /// The link is not an IMDb title link
    #[error("Invalid IMDb link for show: {0}")]
    InvalidLink(String),

    /// The title exists but is not a series
    #[error("Not a show: {0}")]
    NotAShow(String),

    /// Rating outside of the accepted range
    #[error("Rating must be between 0 and 10, got {0}")]
    InvalidRating(f64),

    /// No show with the given name is in the catalog
    #[error("No show named '{0}' in the catalog")]
    ShowNotFound(String),

    /// Error during metadata retrieval
    #[error("Metadata retrieval error: {0}")]
    MetadataRetrieval(#[from] MetadataRetrievalError),

    /// Error during catalog storage operations
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Error while resolving the configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Everything needed to add a show
#[derive(Debug, Clone, PartialEq)]
pub struct AddShowRequest {
    /// Display name, unique within the catalog
    pub name: String,
    /// Link to the IMDb title page
    pub imdb_link: String,
    pub status: Status,
    pub last_watched: u32,
    pub rating: f64,
    /// Explicit notify flag, notifications are on if absent
    pub notify: Option<bool>,
}

impl AddShowRequest {
    /// A request with default status, progress and rating
    pub fn new(name: impl Into<String>, imdb_link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            imdb_link: imdb_link.into(),
            status: Status::default(),
            last_watched: 0,
            rating: 0.0,
            notify: None,
        }
    }

    /// Checks the rating and the link without touching network or storage
    ///
    /// # Returns
    ///
    /// The title identifier of the linked show
    pub fn validate(&self) -> Result<TitleId, BingeWatcherError> {
        check_rating(self.rating)?;
        title_id_from_link(&self.imdb_link)
            .ok_or_else(|| BingeWatcherError::InvalidLink(self.imdb_link.clone()))
    }
}

/// Fields to change on an existing show, `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowUpdate {
    pub new_name: Option<String>,
    pub last_watched: Option<u32>,
    pub rating: Option<f64>,
    /// Explicit notify flag, takes precedence over the one implied by `status`
    pub notify: Option<bool>,
    pub status: Option<Status>,
}

impl ShowUpdate {
    pub fn is_empty(&self) -> bool {
        self.new_name.is_none()
            && self.last_watched.is_none()
            && self.rating.is_none()
            && self.notify.is_none()
            && self.status.is_none()
    }

    /// The notify flag this update results in, if any
    fn effective_notify(&self) -> Option<bool> {
        self.notify
            .or_else(|| self.status.map(|status| status.implied_notify()))
    }

    fn apply_to(&self, show: &mut Show) {
        if let Some(name) = &self.new_name {
            show.name = name.clone();
        }
        if let Some(last_watched) = self.last_watched {
            show.last_watched = last_watched;
        }
        if let Some(rating) = self.rating {
            show.rating = rating;
        }
        if let Some(status) = self.status {
            show.status = status;
        }
        if let Some(notify) = self.effective_notify() {
            show.notify = notify;
        }
    }
}

/// A show together with the episodes still to be watched
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub show: Show,
    pub pending: Vec<PendingEpisode>,
}

fn check_rating(rating: f64) -> Result<(), BingeWatcherError> {
    if (0.0..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(BingeWatcherError::InvalidRating(rating))
    }
}

/// Adds a show to the catalog
///
/// The link is validated before anything else happens. The metadata API is
/// then asked whether the title is a series and for its released episodes.
/// The show and its pending episodes are stored in a single transaction, so
/// a failure (e.g. a duplicate name) leaves the catalog untouched.
///
/// Pending episodes are only seeded for shows with the notify flag set.
///
/// # Returns
///
/// The stored show
///
/// # Examples
///
/// ```no_run
/// use bingewatcher::{AddShowRequest, CatalogStore, ImdbApiProvider, add_show};
///
/// let mut store = CatalogStore::open("bingewatcher.db").unwrap();
/// let provider = ImdbApiProvider::new().unwrap();
/// let request = AddShowRequest::new("Pluribus", "https://www.imdb.com/title/tt22202452/");
/// let show = add_show(&mut store, &provider, request, |_| {}).unwrap();
/// println!("{} is now tracked", show.name);
/// ```
pub fn add_show<P, F>(
    store: &mut CatalogStore,
    provider: &P,
    request: AddShowRequest,
    mut progress_callback: F,
) -> Result<Show, BingeWatcherError>
where
    P: MetadataProvider + ?Sized,
    F: FnMut(ProgressEvent),
{
    let title_id = request.validate()?;

    progress_callback(ProgressEvent::FetchingMetadata {
        title_id: title_id.to_string(),
    });

    if !provider.is_series(&title_id)? {
        return Err(BingeWatcherError::NotAShow(title_id.to_string()));
    }

    let episodes = provider.fetch_episodes(&title_id)?;
    progress_callback(ProgressEvent::EpisodesFetched {
        count: episodes.len(),
    });

    let new_show = NewShow {
        title_id,
        notify: request.notify.unwrap_or(true),
        name: request.name,
        status: request.status,
        latest_episode: u32::try_from(episodes.len()).unwrap_or(u32::MAX),
        last_watched: request.last_watched,
        rating: request.rating,
        imdb_link: request.imdb_link,
    };

    let (show, created) = store.transaction::<_, BingeWatcherError, _>(|tx| {
        let id = queries::insert_show(tx, &new_show)?;
        let show = Show {
            id,
            title_id: new_show.title_id.to_string(),
            name: new_show.name.clone(),
            status: new_show.status,
            latest_episode: new_show.latest_episode,
            last_watched: new_show.last_watched,
            rating: new_show.rating,
            imdb_link: new_show.imdb_link.clone(),
            notify: new_show.notify,
        };

        let created = if show.notify {
            episode_sync::seed_pending_episodes(tx, &show, &episodes)?
        } else {
            0
        };

        Ok((show, created))
    })?;

    info!(
        "Added '{}' ({}) with {} pending episode(s)",
        show.name, show.title_id, created
    );
    progress_callback(ProgressEvent::PendingEpisodesStored {
        show_name: show.name.clone(),
        count: created,
    });

    Ok(show)
}

/// Updates a show in the catalog
///
/// Changing the status also changes the notify flag (on for
/// `plan_to_watch` and `watching`, off otherwise) unless `update.notify`
/// says otherwise. Setting the last watched episode removes the pending
/// episodes up to it; the metadata API is not consulted.
///
/// # Returns
///
/// The show as stored after the update
pub fn update_show<F>(
    store: &mut CatalogStore,
    name: &str,
    update: ShowUpdate,
    mut progress_callback: F,
) -> Result<Show, BingeWatcherError>
where
    F: FnMut(ProgressEvent),
{
    if let Some(rating) = update.rating {
        check_rating(rating)?;
    }

    let (show, pruned) = store.transaction::<_, BingeWatcherError, _>(|tx| {
        let mut show = queries::find_show(tx, name)?
            .ok_or_else(|| BingeWatcherError::ShowNotFound(name.to_string()))?;

        if update.is_empty() {
            return Ok((show, None));
        }

        update.apply_to(&mut show);
        queries::save_show(tx, &show)?;

        let pruned = match update.last_watched {
            Some(_) => Some(episode_sync::prune_pending_episodes(tx, &show)?),
            None => None,
        };

        Ok((show, pruned))
    })?;

    info!("Updated '{}'", show.name);
    if let Some(count) = pruned {
        progress_callback(ProgressEvent::PendingEpisodesPruned {
            show_name: show.name.clone(),
            count,
        });
    }

    Ok(show)
}

/// Removes a show and all of its pending episodes
///
/// # Returns
///
/// The show as it was stored before deletion
pub fn delete_show(store: &mut CatalogStore, name: &str) -> Result<Show, BingeWatcherError> {
    let show = store.transaction::<_, BingeWatcherError, _>(|tx| {
        let show = queries::find_show(tx, name)?
            .ok_or_else(|| BingeWatcherError::ShowNotFound(name.to_string()))?;
        queries::delete_show(tx, show.id)?;
        Ok(show)
    })?;

    info!("Deleted '{}'", show.name);
    Ok(show)
}

/// Flips the notify flag of a show
///
/// # Returns
///
/// The new value of the flag
pub fn toggle_notify(store: &mut CatalogStore, name: &str) -> Result<bool, BingeWatcherError> {
    let notify = store.transaction::<_, BingeWatcherError, _>(|tx| {
        let show = queries::find_show(tx, name)?
            .ok_or_else(|| BingeWatcherError::ShowNotFound(name.to_string()))?;
        queries::set_notify(tx, show.id, !show.notify)?;
        Ok(!show.notify)
    })?;

    info!("Notify for '{}' is now {}", name, notify);
    Ok(notify)
}

/// Lists every show (by name) with its pending episodes (by number)
pub fn catalog(store: &CatalogStore) -> Result<Vec<CatalogEntry>, BingeWatcherError> {
    let conn = store.connection();

    let mut entries = Vec::new();
    for show in queries::list_shows(conn)? {
        let pending = queries::list_pending_episodes(conn, show.id)?;
        entries.push(CatalogEntry { show, pending });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const LINK: &str = "https://www.imdb.com/title/tt0903747/";

    /// Metadata provider serving a fixed answer and counting calls
    struct FixtureProvider {
        series: bool,
        episodes: Vec<Episode>,
        fail: bool,
        calls: Cell<usize>,
    }

    impl FixtureProvider {
        fn series(numbers: impl IntoIterator<Item = u32>) -> Self {
            Self {
                series: true,
                episodes: numbers
                    .into_iter()
                    .map(|number| Episode {
                        number,
                        title: format!("Episode {}", number),
                        plot: format!("Plot of episode {}", number),
                        rating: 8.5,
                    })
                    .collect(),
                fail: false,
                calls: Cell::new(0),
            }
        }

        fn movie() -> Self {
            Self {
                series: false,
                ..Self::series([])
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::series([])
            }
        }
    }

    impl MetadataProvider for FixtureProvider {
        fn is_series(&self, _title_id: &TitleId) -> Result<bool, MetadataRetrievalError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(MetadataRetrievalError::RequestError("offline".to_string()));
            }
            Ok(self.series)
        }

        fn fetch_episodes(
            &self,
            _title_id: &TitleId,
        ) -> Result<Vec<Episode>, MetadataRetrievalError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.episodes.clone())
        }
    }

    fn pending_numbers(store: &CatalogStore, name: &str) -> Vec<u32> {
        catalog(store)
            .unwrap()
            .into_iter()
            .find(|entry| entry.show.name == name)
            .map(|entry| entry.pending.iter().map(|e| e.number).collect())
            .unwrap_or_default()
    }

    fn store_with_show(episodes: impl IntoIterator<Item = u32>) -> CatalogStore {
        let mut store = CatalogStore::open_in_memory().unwrap();
        let provider = FixtureProvider::series(episodes);
        add_show(
            &mut store,
            &provider,
            AddShowRequest::new("Breaking Bad", LINK),
            |_| {},
        )
        .unwrap();
        store
    }

    #[test]
    fn test_add_seeds_all_unwatched_episodes() {
        let mut store = CatalogStore::open_in_memory().unwrap();
        let provider = FixtureProvider::series(1..=5);
        let mut events = Vec::new();

        let show = add_show(
            &mut store,
            &provider,
            AddShowRequest::new("Breaking Bad", LINK),
            |event| events.push(event),
        )
        .unwrap();

        assert_eq!(show.title_id, "tt0903747");
        assert_eq!(show.status, Status::Watching);
        assert_eq!(show.latest_episode, 5);
        assert!(show.notify);
        assert_eq!(pending_numbers(&store, "Breaking Bad"), vec![1, 2, 3, 4, 5]);
        assert_eq!(
            events.last(),
            Some(&ProgressEvent::PendingEpisodesStored {
                show_name: "Breaking Bad".to_string(),
                count: 5
            })
        );
    }

    #[test]
    fn test_add_skips_watched_episodes() {
        let mut store = CatalogStore::open_in_memory().unwrap();
        let provider = FixtureProvider::series(1..=5);
        let request = AddShowRequest {
            last_watched: 2,
            ..AddShowRequest::new("Breaking Bad", LINK)
        };

        add_show(&mut store, &provider, request, |_| {}).unwrap();
        assert_eq!(pending_numbers(&store, "Breaking Bad"), vec![3, 4, 5]);
    }

    #[test]
    fn test_add_without_notify_stores_no_episodes() {
        let mut store = CatalogStore::open_in_memory().unwrap();
        let provider = FixtureProvider::series(1..=5);
        let request = AddShowRequest {
            notify: Some(false),
            ..AddShowRequest::new("Breaking Bad", LINK)
        };

        let show = add_show(&mut store, &provider, request, |_| {}).unwrap();
        assert!(!show.notify);
        assert_eq!(show.latest_episode, 5);
        assert!(pending_numbers(&store, "Breaking Bad").is_empty());
    }

    #[test]
    fn test_add_notifies_regardless_of_status() {
        let mut store = CatalogStore::open_in_memory().unwrap();
        let provider = FixtureProvider::series(1..=3);
        let request = AddShowRequest {
            status: Status::Watched,
            ..AddShowRequest::new("Breaking Bad", LINK)
        };

        let show = add_show(&mut store, &provider, request, |_| {}).unwrap();
        assert_eq!(show.status, Status::Watched);
        assert!(show.notify);
    }

    #[test]
    fn test_add_on_hold_seeds_all_episodes() {
        let mut store = CatalogStore::open_in_memory().unwrap();
        let provider = FixtureProvider::series(1..=5);
        let request = AddShowRequest {
            status: Status::OnHold,
            ..AddShowRequest::new("Breaking Bad", LINK)
        };

        let show = add_show(&mut store, &provider, request, |_| {}).unwrap();
        assert!(show.notify);
        assert_eq!(pending_numbers(&store, "Breaking Bad"), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_validate_request() {
        let request = AddShowRequest::new("Breaking Bad", LINK);
        assert_eq!(request.validate().unwrap().as_str(), "tt0903747");

        let bad_link = AddShowRequest::new("Breaking Bad", "https://www.imdb.com/title/tt12/");
        assert!(matches!(
            bad_link.validate(),
            Err(BingeWatcherError::InvalidLink(_))
        ));

        let bad_rating = AddShowRequest {
            rating: -1.0,
            ..AddShowRequest::new("Breaking Bad", LINK)
        };
        assert!(matches!(
            bad_rating.validate(),
            Err(BingeWatcherError::InvalidRating(_))
        ));
    }

    #[test]
    fn test_add_rejects_invalid_link_before_network() {
        let mut store = CatalogStore::open_in_memory().unwrap();
        let provider = FixtureProvider::series(1..=5);

        let err = add_show(
            &mut store,
            &provider,
            AddShowRequest::new("Breaking Bad", "https://www.imdb.com/name/nm0186505/"),
            |_| {},
        )
        .unwrap_err();

        assert!(matches!(err, BingeWatcherError::InvalidLink(_)));
        assert_eq!(provider.calls.get(), 0);
        assert!(catalog(&store).unwrap().is_empty());
    }

    #[test]
    fn test_add_rejects_invalid_rating() {
        let mut store = CatalogStore::open_in_memory().unwrap();
        let provider = FixtureProvider::series(1..=5);
        let request = AddShowRequest {
            rating: 11.0,
            ..AddShowRequest::new("Breaking Bad", LINK)
        };

        let err = add_show(&mut store, &provider, request, |_| {}).unwrap_err();
        assert!(matches!(err, BingeWatcherError::InvalidRating(_)));
        assert_eq!(provider.calls.get(), 0);
    }

    #[test]
    fn test_add_rejects_movies() {
        let mut store = CatalogStore::open_in_memory().unwrap();
        let provider = FixtureProvider::movie();

        let err = add_show(
            &mut store,
            &provider,
            AddShowRequest::new("El Camino", "https://www.imdb.com/title/tt9243946/"),
            |_| {},
        )
        .unwrap_err();

        assert!(matches!(err, BingeWatcherError::NotAShow(id) if id == "tt9243946"));
        assert_eq!(provider.calls.get(), 1);
        assert!(catalog(&store).unwrap().is_empty());
    }

    #[test]
    fn test_add_surfaces_remote_failure() {
        let mut store = CatalogStore::open_in_memory().unwrap();
        let provider = FixtureProvider::failing();

        let err = add_show(
            &mut store,
            &provider,
            AddShowRequest::new("Breaking Bad", LINK),
            |_| {},
        )
        .unwrap_err();

        assert!(matches!(err, BingeWatcherError::MetadataRetrieval(_)));
        assert!(catalog(&store).unwrap().is_empty());
    }

    #[test]
    fn test_add_duplicate_name_keeps_prior_state() {
        let mut store = store_with_show(1..=5);
        let provider = FixtureProvider::series(1..=8);

        let err = add_show(
            &mut store,
            &provider,
            AddShowRequest::new("Breaking Bad", "https://www.imdb.com/title/tt3032476/"),
            |_| {},
        )
        .unwrap_err();

        assert!(matches!(
            err,
            BingeWatcherError::Storage(StoreError::DuplicateName(_))
        ));
        let entries = catalog(&store).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].show.title_id, "tt0903747");
        assert_eq!(entries[0].pending.len(), 5);
    }

    #[test]
    fn test_update_last_watched_prunes_pending() {
        let mut store = store_with_show(1..=5);
        let mut events = Vec::new();

        let show = update_show(
            &mut store,
            "Breaking Bad",
            ShowUpdate {
                last_watched: Some(3),
                ..Default::default()
            },
            |event| events.push(event),
        )
        .unwrap();

        assert_eq!(show.last_watched, 3);
        assert_eq!(show.latest_episode, 5);
        assert_eq!(pending_numbers(&store, "Breaking Bad"), vec![4, 5]);
        assert_eq!(
            events,
            vec![ProgressEvent::PendingEpisodesPruned {
                show_name: "Breaking Bad".to_string(),
                count: 3
            }]
        );
    }

    #[test]
    fn test_update_status_sets_notify() {
        let mut store = store_with_show(1..=2);

        let dropped = update_show(
            &mut store,
            "Breaking Bad",
            ShowUpdate {
                status: Some(Status::Dropped),
                ..Default::default()
            },
            |_| {},
        )
        .unwrap();
        assert_eq!(dropped.status, Status::Dropped);
        assert!(!dropped.notify);

        let watching = update_show(
            &mut store,
            "Breaking Bad",
            ShowUpdate {
                status: Some(Status::Watching),
                ..Default::default()
            },
            |_| {},
        )
        .unwrap();
        assert!(watching.notify);
    }

    #[test]
    fn test_update_explicit_notify_wins_over_status() {
        let mut store = store_with_show(1..=2);

        let show = update_show(
            &mut store,
            "Breaking Bad",
            ShowUpdate {
                status: Some(Status::OnHold),
                notify: Some(true),
                ..Default::default()
            },
            |_| {},
        )
        .unwrap();

        assert_eq!(show.status, Status::OnHold);
        assert!(show.notify);
    }

    #[test]
    fn test_update_rename_and_rating() {
        let mut store = store_with_show(1..=2);

        update_show(
            &mut store,
            "Breaking Bad",
            ShowUpdate {
                new_name: Some("BrBa".to_string()),
                rating: Some(9.5),
                ..Default::default()
            },
            |_| {},
        )
        .unwrap();

        let entries = catalog(&store).unwrap();
        assert_eq!(entries[0].show.name, "BrBa");
        assert_eq!(entries[0].show.rating, 9.5);
        assert_eq!(entries[0].pending.len(), 2);
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let mut store = store_with_show(1..=2);
        let before = catalog(&store).unwrap();

        let show = update_show(&mut store, "Breaking Bad", ShowUpdate::default(), |_| {}).unwrap();

        assert_eq!(show, before[0].show);
        assert_eq!(catalog(&store).unwrap(), before);
    }

    #[test]
    fn test_failed_update_keeps_prior_state() {
        let mut store = store_with_show(1..=5);
        let provider = FixtureProvider::series(1..=1);
        add_show(
            &mut store,
            &provider,
            AddShowRequest::new("Andor", "https://www.imdb.com/title/tt9253284/"),
            |_| {},
        )
        .unwrap();
        let before = catalog(&store).unwrap();

        let err = update_show(
            &mut store,
            "Breaking Bad",
            ShowUpdate {
                new_name: Some("Andor".to_string()),
                last_watched: Some(3),
                ..Default::default()
            },
            |_| {},
        )
        .unwrap_err();

        assert!(matches!(
            err,
            BingeWatcherError::Storage(StoreError::DuplicateName(_))
        ));
        assert_eq!(catalog(&store).unwrap(), before);
        assert_eq!(pending_numbers(&store, "Breaking Bad"), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_update_unknown_show() {
        let mut store = CatalogStore::open_in_memory().unwrap();

        let err = update_show(
            &mut store,
            "The Wire",
            ShowUpdate {
                last_watched: Some(1),
                ..Default::default()
            },
            |_| {},
        )
        .unwrap_err();

        assert!(matches!(err, BingeWatcherError::ShowNotFound(name) if name == "The Wire"));
    }

    #[test]
    fn test_delete_cascades_to_pending_episodes() {
        let mut store = store_with_show(1..=5);

        let deleted = delete_show(&mut store, "Breaking Bad").unwrap();
        assert_eq!(deleted.name, "Breaking Bad");
        assert!(catalog(&store).unwrap().is_empty());

        let count: i64 = store
            .connection()
            .query_row("SELECT COUNT(*) FROM new_episodes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);

        assert!(matches!(
            delete_show(&mut store, "Breaking Bad"),
            Err(BingeWatcherError::ShowNotFound(_))
        ));
    }

    #[test]
    fn test_toggle_notify() {
        let mut store = store_with_show(1..=2);

        assert!(!toggle_notify(&mut store, "Breaking Bad").unwrap());
        assert!(toggle_notify(&mut store, "Breaking Bad").unwrap());
        assert!(matches!(
            toggle_notify(&mut store, "The Wire"),
            Err(BingeWatcherError::ShowNotFound(_))
        ));
    }

    #[test]
    fn test_catalog_is_ordered_by_name() {
        let mut store = store_with_show(1..=2);
        let provider = FixtureProvider::series(1..=1);
        add_show(
            &mut store,
            &provider,
            AddShowRequest::new("Andor", "https://www.imdb.com/title/tt9253284/"),
            |_| {},
        )
        .unwrap();

        let names: Vec<String> = catalog(&store)
            .unwrap()
            .into_iter()
            .map(|entry| entry.show.name)
            .collect();
        assert_eq!(names, vec!["Andor", "Breaking Bad"]);
    }
}
