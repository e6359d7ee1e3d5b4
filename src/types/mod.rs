mod lecture;
mod video;

pub use lecture::{LectureDraft, LectureRecord, Segment};
pub use video::VideoType;
