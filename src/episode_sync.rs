//! Episode synchronisation
//!
//! Keeps the pending episodes of a show in line with its watch progress:
//! seeding them from a freshly fetched episode list, and pruning the ones
//! the user has caught up with. Pruning never goes back to the network.

use crate::catalog_store::{Show, StoreError, queries};
use crate::metadata_retrieval::Episode;
use log::debug;
use rusqlite::Connection;

/// Episodes numbered above `last_watched`, in listing order
pub(crate) fn select_new_episodes(
    episodes: &[Episode],
    last_watched: u32,
) -> impl Iterator<Item = &Episode> {
    episodes.iter().filter(move |e| e.number > last_watched)
}

/// Stores every episode the show has not been watched up to yet
///
/// # Returns
///
/// The number of pending episodes created
pub(crate) fn seed_pending_episodes(
    conn: &Connection,
    show: &Show,
    episodes: &[Episode],
) -> Result<usize, StoreError> {
    let mut created = 0;
    for episode in select_new_episodes(episodes, show.last_watched) {
        queries::insert_pending_episode(conn, show.id, episode)?;
        created += 1;
    }

    debug!("Seeded {} pending episode(s) for '{}'", created, show.name);
    Ok(created)
}

/// Drops the pending episodes at or below the show's last watched episode
///
/// # Returns
///
/// The number of pending episodes removed
pub(crate) fn prune_pending_episodes(conn: &Connection, show: &Show) -> Result<usize, StoreError> {
    let removed = queries::delete_pending_up_to(conn, show.id, show.last_watched)?;
    debug!("Pruned {} pending episode(s) for '{}'", removed, show.name);
    Ok(removed)
}
