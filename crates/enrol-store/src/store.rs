use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use enrol_model::StudentRecord;

use crate::error::Result;

/// Fixed name of the registry data file.
pub const DEFAULT_DATA_FILE: &str = "students.json";

/// File-backed store for the full record collection.
///
/// The collection is persisted as one pretty-printed JSON array; there is
/// no partial-update path, every save replaces the whole file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the fixed default location in the working directory.
    pub fn at_default_path() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted collection.
    ///
    /// A missing, unreadable, or malformed file all resolve to the empty
    /// start state. The cause is logged but never surfaced; callers cannot
    /// distinguish a fresh install from a damaged file.
    pub fn load(&self) -> Vec<StudentRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file, starting empty");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "data file unreadable, starting empty"
                );
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "data file malformed, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Persist the full collection, replacing any previous contents.
    ///
    /// Every field is written, including the engine-owned identifiers, so
    /// a reload reproduces the collection field for field. Failures
    /// surface to the caller; nothing is retried.
    pub fn save(&self, records: &[StudentRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), students = records.len(), "collection saved");
        Ok(())
    }
}
