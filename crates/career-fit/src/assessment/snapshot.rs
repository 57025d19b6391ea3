use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::answers::Answer;
use super::domain::QuestionId;
use super::scoring::ScoreReport;

/// The single persisted result of the most recently completed assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub report: ScoreReport,
    pub answers: BTreeMap<QuestionId, Answer>,
    pub completed_at: DateTime<Utc>,
}

/// Storage for the latest snapshot. Saving replaces whatever was stored.
pub trait SnapshotStore: Send + Sync {
    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError>;
    fn load(&self) -> Result<Option<Snapshot>, SnapshotError>;
    fn clear(&self) -> Result<(), SnapshotError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("stored snapshot is malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("snapshot could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),
}

/// JSON file store. Each write goes to its own sibling temp file that is renamed into place.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let directory = self.directory();
        fs::create_dir_all(directory)?;

        let encoded = serde_json::to_vec_pretty(snapshot).map_err(SnapshotError::Encode)?;
        // Each save stages into its own file so concurrent writers never share one.
        let mut staging = NamedTempFile::new_in(directory)?;
        staging.write_all(&encoded)?;
        staging.as_file().sync_all()?;
        staging
            .persist(&self.path)
            .map_err(|err| SnapshotError::Io(err.error))?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(SnapshotError::Malformed)
    }

    fn clear(&self) -> Result<(), SnapshotError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Process-local store used by the demo and tests.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    slot: Mutex<Option<Snapshot>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<Snapshot>>, SnapshotError> {
        self.slot
            .lock()
            .map_err(|_| SnapshotError::Unavailable("snapshot mutex poisoned".to_string()))
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        *self.lock()? = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        Ok(self.lock()?.clone())
    }

    fn clear(&self) -> Result<(), SnapshotError> {
        *self.lock()? = None;
        Ok(())
    }
}
