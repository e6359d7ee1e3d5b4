//! Runtime configuration.

use std::path::{Path, PathBuf};

use crate::render::cache::DEFAULT_EXPORT_CACHE_SIZE;

pub const DB_FILE_NAME: &str = "local_db.json";
pub const VIDEO_DIR_NAME: &str = "saved_videos";
pub const DEFAULT_UPLOAD_LIMIT: u64 = 2 * 1024 * 1024 * 1024;

/// Where lectures live on disk and how big uploads may get.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the store file and the video directory
    pub data_dir: PathBuf,
    /// Largest accepted upload in bytes
    pub upload_limit: u64,
    /// Number of rendered PDFs kept in memory
    pub export_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::default_data_dir())
    }
}

impl Config {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_owned(),
            upload_limit: DEFAULT_UPLOAD_LIMIT,
            export_cache_size: DEFAULT_EXPORT_CACHE_SIZE,
        }
    }

    /// `<local data dir>/lecturai`, or the working directory when the platform
    /// has no data directory.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|dir| dir.join("lecturai"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }
}

/// Command line options shared by every binary.
#[derive(clap::Args, Debug, Clone)]
pub struct DataArgs {
    /// Directory for the lecture store and uploaded videos
    #[arg(long, env = "LECTURAI_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Number of rendered PDFs kept in memory
    #[arg(long, env = "LECTURAI_EXPORT_CACHE", default_value_t = DEFAULT_EXPORT_CACHE_SIZE)]
    pub export_cache: usize,
}

impl DataArgs {
    pub fn into_config(self) -> Config {
        let mut config = Config::new(self.data_dir.unwrap_or_else(Config::default_data_dir));
        config.export_cache_size = self.export_cache;
        config
    }
}
