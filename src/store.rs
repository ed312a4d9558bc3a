//! JSON-file mirror of the appointment list.
//!
//! One file holds the whole list as a JSON array; every save rewrites it
//! entirely. Reads that fail for any reason (missing file, unreadable file,
//! malformed JSON) fall back to an empty list — that is policy, not an
//! oversight: the app always degrades to a usable empty state. The file is
//! shared, mutable state with no locking, so two instances writing
//! concurrently can overwrite each other's changes; known limitation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config;
use crate::models::Appointment;

/// Errors from persisting the list. Reads never error — see [`AppointmentStore::load`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error writing appointment store: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize appointment list: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Storage adapter for the appointment list.
pub struct AppointmentStore {
    path: PathBuf,
}

impl AppointmentStore {
    /// Store at the platform default location (`config::appointments_file`).
    pub fn at_default_location() -> Self {
        Self {
            path: config::appointments_file(),
        }
    }

    /// Store at an arbitrary path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted list. Missing or corrupt data yields an empty
    /// list, logged but never surfaced to the caller.
    pub fn load(&self) -> Vec<Appointment> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No appointment store yet, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Appointment store unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Appointment store corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Serializes the full list and rewrites the file, creating parent
    /// directories on first save.
    pub fn save(&self, list: &[Appointment]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(list)?;
        fs::write(&self.path, json)?;
        tracing::debug!(count = list.len(), "Appointment list persisted");
        Ok(())
    }
}
