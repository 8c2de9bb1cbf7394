use crate::link_validator::TitleId;
use rusqlite::Row;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Watching status of a show
///
/// Any status can follow any other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Status {
    PlanToWatch,
    #[default]
    Watching,
    OnHold,
    Dropped,
    Watched,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::PlanToWatch => "plan_to_watch",
            Status::Watching => "watching",
            Status::OnHold => "on_hold",
            Status::Dropped => "dropped",
            Status::Watched => "watched",
        }
    }

    /// Notify flag a show gets when it enters this status
    pub fn implied_notify(&self) -> bool {
        matches!(self, Status::PlanToWatch | Status::Watching)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown status: {0}")]
pub struct UnknownStatus(String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plan_to_watch" => Ok(Status::PlanToWatch),
            "watching" => Ok(Status::Watching),
            "on_hold" => Ok(Status::OnHold),
            "dropped" => Ok(Status::Dropped),
            "watched" => Ok(Status::Watched),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl ToSql for Status {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// A tracked show as stored in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    pub id: i64,
    pub title_id: String,
    pub name: String,
    pub status: Status,
    /// Number of released episodes when the show was added
    pub latest_episode: u32,
    pub last_watched: u32,
    pub rating: f64,
    pub imdb_link: String,
    pub notify: bool,
}

impl Show {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title_id: row.get("title_id")?,
            name: row.get("name")?,
            status: row.get("status")?,
            latest_episode: row.get("latest_episode")?,
            last_watched: row.get("last_watched")?,
            rating: row.get("rating")?,
            imdb_link: row.get("imdb_link")?,
            notify: row.get("notify")?,
        })
    }
}

/// A show about to be inserted
#[derive(Debug, Clone)]
pub struct NewShow {
    pub title_id: TitleId,
    pub name: String,
    pub status: Status,
    pub latest_episode: u32,
    pub last_watched: u32,
    pub rating: f64,
    pub imdb_link: String,
    pub notify: bool,
}

/// A released episode the user has not watched yet
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEpisode {
    pub id: i64,
    pub show_id: i64,
    pub number: u32,
    pub title: String,
    pub plot: String,
    pub rating: f64,
    pub trailer_link: Option<String>,
}

impl PendingEpisode {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            show_id: row.get("show_id")?,
            number: row.get("number")?,
            title: row.get("title")?,
            plot: row.get::<_, Option<String>>("plot")?.unwrap_or_default(),
            rating: row.get("rating")?,
            trailer_link: row.get("trailer_link")?,
        })
    }

    pub fn has_trailer(&self) -> bool {
        self.trailer_link.is_some()
    }
}
