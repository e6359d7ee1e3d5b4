use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info, warn};

use super::videos::VideoDirectory;
use crate::{LectureRecord, StorageError};

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Persistence for the ordered lecture list. Implementations read and write the
/// whole sequence at once; there are no partial updates.
#[async_trait]
pub trait LectureStore: Send + Sync {
    /// Reads the persisted sequence. A store that was never written is empty.
    async fn try_load(&self) -> StorageResult<Vec<LectureRecord>>;

    /// Overwrites the persisted sequence.
    async fn save(&self, records: &[LectureRecord]) -> StorageResult<()>;

    /// Like [`LectureStore::try_load`], but an unreadable store degrades to an
    /// empty one.
    async fn load(&self) -> Vec<LectureRecord> {
        match self.try_load().await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "lecture store unreadable, continuing with an empty list");
                Vec::new()
            }
        }
    }

    /// Removes the record with `id`, then its video in `videos`.
    ///
    /// The store is saved before the video is removed, so a failed save leaves
    /// both in place. Returns `None` without touching the store or the disk
    /// when no record matches.
    async fn delete(&self, id: &str, videos: &VideoDirectory) -> StorageResult<Option<LectureRecord>> {
        let mut records = self.load().await;
        let Some(position) = records.iter().position(|r| r.id == id) else {
            debug!(id, "delete requested for unknown lecture");
            return Ok(None);
        };

        let removed = records.remove(position);
        self.save(&records).await?;
        videos.remove(&removed.file_path).await?;

        info!(id, title = %removed.title, "deleted lecture");
        Ok(Some(removed))
    }
}

/// The lecture list kept as one JSON array in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_owned(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LectureStore for JsonFileStore {
    async fn try_load(&self) -> StorageResult<Vec<LectureRecord>> {
        if !fs::try_exists(&self.path).await? {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).await?;
        serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })
    }

    async fn save(&self, records: &[LectureRecord]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StorageError::Storage(format!("Failed to serialize lectures: {}", e)))?;
        fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), count = records.len(), "saved lecture store");
        Ok(())
    }
}
