//! Statements against the catalog tables
//!
//! All functions take a plain connection so they can run both directly on
//! the store and inside a transaction.

use super::{NewShow, PendingEpisode, Show, StoreError};
use crate::metadata_retrieval::Episode;
use log::debug;
use rusqlite::{Connection, OptionalExtension, params};

const SHOW_COLUMNS: &str =
    "id, title_id, name, status, latest_episode, last_watched, rating, imdb_link, notify";

/// Turns a unique constraint violation into `StoreError::DuplicateName`
fn name_conflict(err: rusqlite::Error, name: &str) -> StoreError {
    match err {
        rusqlite::Error::SqliteFailure(ref e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            StoreError::DuplicateName(name.to_string())
        }
        other => StoreError::Sqlite(other),
    }
}

pub(crate) fn insert_show(conn: &Connection, show: &NewShow) -> Result<i64, StoreError> {
    conn.execute(
        "INSERT INTO shows (title_id, name, status, latest_episode, last_watched, rating, imdb_link, notify)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            show.title_id.as_str(),
            show.name,
            show.status,
            show.latest_episode,
            show.last_watched,
            show.rating,
            show.imdb_link,
            show.notify,
        ],
    )
    .map_err(|e| name_conflict(e, &show.name))?;

    let id = conn.last_insert_rowid();
    debug!("Inserted show '{}' with id {}", show.name, id);
    Ok(id)
}

pub(crate) fn find_show(conn: &Connection, name: &str) -> Result<Option<Show>, StoreError> {
    let show = conn
        .query_row(
            &format!("SELECT {} FROM shows WHERE name = ?1", SHOW_COLUMNS),
            [name],
            Show::from_row,
        )
        .optional()?;
    Ok(show)
}

pub(crate) fn list_shows(conn: &Connection) -> Result<Vec<Show>, StoreError> {
    let mut stmt = conn.prepare(&format!("SELECT {} FROM shows ORDER BY name", SHOW_COLUMNS))?;
    let shows = stmt
        .query_map([], Show::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(shows)
}

/// Writes the mutable fields of a show back to its row
pub(crate) fn save_show(conn: &Connection, show: &Show) -> Result<(), StoreError> {
    conn.execute(
        "UPDATE shows SET name = ?1, status = ?2, last_watched = ?3, rating = ?4, notify = ?5
         WHERE id = ?6",
        params![
            show.name,
            show.status,
            show.last_watched,
            show.rating,
            show.notify,
            show.id
        ],
    )
    .map_err(|e| name_conflict(e, &show.name))?;

    debug!("Saved show {} ('{}')", show.id, show.name);
    Ok(())
}

pub(crate) fn set_notify(conn: &Connection, show_id: i64, notify: bool) -> Result<(), StoreError> {
    conn.execute(
        "UPDATE shows SET notify = ?1 WHERE id = ?2",
        params![notify, show_id],
    )?;
    Ok(())
}

/// Deletes a show, its pending episodes go with it
pub(crate) fn delete_show(conn: &Connection, show_id: i64) -> Result<usize, StoreError> {
    let deleted = conn.execute("DELETE FROM shows WHERE id = ?1", [show_id])?;
    debug!("Deleted {} show row(s) for id {}", deleted, show_id);
    Ok(deleted)
}

pub(crate) fn insert_pending_episode(
    conn: &Connection,
    show_id: i64,
    episode: &Episode,
) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO new_episodes (show_id, number, title, plot, rating) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            show_id,
            episode.number,
            episode.title,
            episode.plot,
            episode.rating
        ],
    )?;
    Ok(())
}

/// Removes every pending episode numbered `last_watched` or lower
pub(crate) fn delete_pending_up_to(
    conn: &Connection,
    show_id: i64,
    last_watched: u32,
) -> Result<usize, StoreError> {
    let deleted = conn.execute(
        "DELETE FROM new_episodes WHERE show_id = ?1 AND number <= ?2",
        params![show_id, last_watched],
    )?;
    Ok(deleted)
}

pub(crate) fn list_pending_episodes(
    conn: &Connection,
    show_id: i64,
) -> Result<Vec<PendingEpisode>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, show_id, number, title, plot, rating, trailer_link
         FROM new_episodes WHERE show_id = ?1 ORDER BY number, id",
    )?;
    let episodes = stmt
        .query_map([show_id], PendingEpisode::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(episodes)
}
