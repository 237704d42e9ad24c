use std::fs;
use std::path::{Path, PathBuf};

use gazette_core::IssueNumber;
use gazette_logging::{gazette_debug, gazette_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::persist::{AtomicFileWriter, PersistError};

/// On-disk record shape. Kept as a plain JSON object so the file stays
/// hand-inspectable between runs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedState {
    last_processed_gazette_number: Option<String>,
}

#[derive(Debug, Error)]
pub enum StateError {
    #[error("state path {0:?} has no file name")]
    InvalidPath(PathBuf),
    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write state file: {0}")]
    Write(#[from] PersistError),
}

/// The single persisted fact carried between runs.
pub trait StateStore: Send + Sync {
    /// Returns the last processed issue number, or `None` for a missing,
    /// unreadable, or corrupt record. This is a contract, not an accident:
    /// any broken state file is equivalent to a first run.
    fn load(&self) -> Option<IssueNumber>;

    /// Replaces the record with `issue`. Atomic: a crash leaves the old
    /// value or the new one, never a torn file.
    fn save(&self, issue: &IssueNumber) -> Result<(), StateError>;
}

pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn split_path(&self) -> Result<(PathBuf, &str), StateError> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let filename = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| StateError::InvalidPath(self.path.clone()))?;
        Ok((dir, filename))
    }
}

impl StateStore for JsonStateStore {
    fn load(&self) -> Option<IssueNumber> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                gazette_debug!("No state file at {:?}; first run", self.path);
                return None;
            }
            Err(err) => {
                gazette_warn!("Failed to read state file {:?}: {}", self.path, err);
                return None;
            }
        };

        match serde_json::from_str::<PersistedState>(&content) {
            Ok(state) => state.last_processed_gazette_number.map(IssueNumber::new),
            Err(err) => {
                gazette_warn!(
                    "Ignoring corrupt state file {:?}: {}",
                    self.path,
                    err
                );
                None
            }
        }
    }

    fn save(&self, issue: &IssueNumber) -> Result<(), StateError> {
        let state = PersistedState {
            last_processed_gazette_number: Some(issue.as_str().to_string()),
        };
        let content = serde_json::to_vec(&state)?;
        let (dir, filename) = self.split_path()?;
        AtomicFileWriter::new(dir).write(filename, &content)?;
        Ok(())
    }
}
