//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the session snapshot and the roster live on disk
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding both files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// File name of the active session snapshot
    #[serde(default = "default_session_file")]
    pub session_file: String,

    /// File name of the player roster
    #[serde(default = "default_roster_file")]
    pub roster_file: String,
}

impl StorageConfig {
    /// Full path of the session snapshot
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(&self.session_file)
    }

    /// Full path of the roster
    pub fn roster_path(&self) -> PathBuf {
        self.data_dir.join(&self.roster_file)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        if self.session_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.session_file"));
        }
        if self.roster_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.roster_file"));
        }
        if self.session_file == self.roster_file {
            return Err(ValidationError::StorageFilesCollide);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            session_file: default_session_file(),
            roster_file: default_roster_file(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_session_file() -> String {
    "chouette_session.json".to_string()
}

fn default_roster_file() -> String {
    "players.json".to_string()
}
