use serde::{Deserialize, Serialize};

/// One timestamped block of the detailed notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "displayTime")]
    pub display_time: String,
    pub title: String,
    pub content: Vec<String>,
}

/// An uploaded lecture video together with its generated notes.
///
/// Records are written once on upload and only ever removed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureRecord {
    pub id: String,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub important_topics: Vec<String>,
    pub exam_questions: Vec<String>,
    pub segments: Vec<Segment>,
    pub file_path: String,
    pub file_size: String,
}

/// Generated notes that are not yet attached to a stored video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LectureDraft {
    pub id: String,
    pub title: String,
    pub date: String,
    pub summary: String,
    pub important_topics: Vec<String>,
    pub exam_questions: Vec<String>,
    pub segments: Vec<Segment>,
}

impl LectureDraft {
    pub fn into_record(self, file_path: String, file_size: String) -> LectureRecord {
        LectureRecord {
            id: self.id,
            title: self.title,
            date: self.date,
            summary: self.summary,
            important_topics: self.important_topics,
            exam_questions: self.exam_questions,
            segments: self.segments,
            file_path,
            file_size,
        }
    }
}
