pub mod store;
pub mod videos;

pub use store::{JsonFileStore, LectureStore, StorageResult};
pub use videos::{StoredVideo, VideoDirectory};
