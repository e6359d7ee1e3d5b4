use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use super::store::StorageResult;
use crate::{config::VIDEO_DIR_NAME, StorageError};

/// A video written by [`VideoDirectory::store`].
#[derive(Debug, Clone)]
pub struct StoredVideo {
    /// Path recorded in the store, relative to the data directory
    pub file_path: String,
    pub size: u64,
    /// Whether an earlier video with the same name was overwritten
    pub replaced: bool,
}

/// Flat `saved_videos` directory under the data directory. Record paths are
/// kept relative to the data directory so a store can be moved with its videos.
pub struct VideoDirectory {
    data_dir: PathBuf,
}

impl VideoDirectory {
    pub async fn new<P: AsRef<Path>>(data_dir: P) -> StorageResult<Self> {
        let data_dir = data_dir.as_ref().to_owned();
        fs::create_dir_all(data_dir.join(VIDEO_DIR_NAME)).await?;
        Ok(Self { data_dir })
    }

    /// Location on disk of a recorded `file_path`. Absolute paths written by
    /// older stores are used as they are.
    pub fn resolve(&self, file_path: &str) -> PathBuf {
        self.data_dir.join(file_path)
    }

    /// Writes the whole buffer, replacing any video that already has this name.
    pub async fn store(&self, name: &str, data: &[u8]) -> StorageResult<StoredVideo> {
        if name.is_empty() || Path::new(name).file_name().map(|n| n != name).unwrap_or(true) {
            return Err(StorageError::Storage(format!("Invalid video name: {:?}", name)));
        }

        let file_path = format!("{}/{}", VIDEO_DIR_NAME, name);
        let path = self.resolve(&file_path);
        let replaced = fs::try_exists(&path).await?;
        if replaced {
            info!(path = %path.display(), "overwriting stored video with the same name");
        }

        fs::write(&path, data).await?;
        Ok(StoredVideo {
            file_path,
            size: data.len() as u64,
            replaced,
        })
    }

    /// Removes a recorded video. A file that is already gone is not an error.
    pub async fn remove(&self, file_path: &str) -> StorageResult<bool> {
        let path = self.resolve(file_path);
        if !fs::try_exists(&path).await? {
            debug!(path = %path.display(), "video already missing");
            return Ok(false);
        }

        fs::remove_file(&path).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn records_paths_relative_to_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let videos = VideoDirectory::new(temp_dir.path()).await.unwrap();

        let stored = videos.store("Lecture1.mp4", b"abc").await.unwrap();
        assert_eq!(stored.file_path, "saved_videos/Lecture1.mp4");
        assert!(!stored.replaced);
        assert!(temp_dir.path().join("saved_videos").join("Lecture1.mp4").exists());

        let again = videos.store("Lecture1.mp4", b"abcd").await.unwrap();
        assert!(again.replaced);
        assert_eq!(again.size, 4);
    }

    #[tokio::test]
    async fn absolute_paths_resolve_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let videos = VideoDirectory::new(temp_dir.path()).await.unwrap();
        let absolute = temp_dir.path().join("elsewhere.mp4");

        assert_eq!(videos.resolve(&absolute.display().to_string()), absolute);
    }

    #[tokio::test]
    async fn rejects_names_with_directories() {
        let temp_dir = TempDir::new().unwrap();
        let videos = VideoDirectory::new(temp_dir.path()).await.unwrap();

        assert!(videos.store("../escape.mp4", b"x").await.is_err());
        assert!(videos.store("", b"x").await.is_err());
        assert!(!videos.remove("saved_videos/none.mp4").await.unwrap());
    }
}
