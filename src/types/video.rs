use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoType {
    Mp4,
    Avi,
    Mov,
}

impl VideoType {
    /// Extensions accepted by the upload view.
    pub const ACCEPTED_EXTENSIONS: [&'static str; 3] = ["mp4", "avi", "mov"];

    /// Classifies an upload by its extension only; the bytes are never inspected.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "mp4" => Some(VideoType::Mp4),
            "avi" => Some(VideoType::Avi),
            "mov" => Some(VideoType::Mov),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            VideoType::Mp4 => "video/mp4",
            VideoType::Avi => "video/x-msvideo",
            VideoType::Mov => "video/quicktime",
        }
    }
}
