//! Runtime configuration
//!
//! Resolves where the catalog lives and which metadata API to talk to.
//! Explicit values (command line flags or their environment variables) win,
//! everything else falls back to platform defaults.

use crate::metadata_retrieval::DEFAULT_API_URL;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the catalog database inside the data directory
const DATABASE_FILE_NAME: &str = "bingewatcher.db";

/// Errors that can occur while resolving the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine data directory location
    #[error("Failed to determine data directory location")]
    DataDirectoryNotFound,

    /// Failed to create the directory holding the database
    #[error("Failed to create directory at {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the SQLite catalog
    pub database_path: PathBuf,
    /// Base URL of the metadata API
    pub api_url: String,
}

impl Settings {
    /// Resolves the settings, creating the database directory if needed
    ///
    /// # Arguments
    ///
    /// * `database_path` - Explicit catalog location, defaults to the platform data directory
    /// * `api_url` - Explicit metadata API base URL, defaults to imdbapi.dev
    pub fn resolve(
        database_path: Option<PathBuf>,
        api_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_path = match database_path {
            Some(path) => path,
            None => default_database_path()?,
        };

        if let Some(parent) = database_path.parent() {
            ensure_dir(parent)?;
        }

        Ok(Self {
            database_path,
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

/// Gets the default location of the catalog database
///
/// Returns the platform-specific data directory path:
/// - Linux: ~/.local/share/bingewatcher/
/// - macOS: ~/Library/Application Support/bingewatcher/
/// - Windows: %APPDATA%\bingewatcher\data\
pub fn default_database_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", "bingewatcher")
        .ok_or(ConfigError::DataDirectoryNotFound)?;

    Ok(proj_dirs.data_dir().join(DATABASE_FILE_NAME))
}

fn ensure_dir(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| ConfigError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
