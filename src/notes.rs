//! Placeholder note generation.
//!
//! Nothing here looks at the video. Topics and questions are sampled from two
//! fixed pools and the segment outline is constant apart from the title of the
//! introduction.

use chrono::Local;
use rand::{seq::SliceRandom, Rng};
use uuid::Uuid;

use crate::{LectureDraft, Segment};

pub const TOPIC_POOL: [&str; 7] = [
    "System Stability",
    "Control System Basics",
    "Signal Flow Graph",
    "Transfer Function",
    "Feedback Mechanism",
    "Frequency Response",
    "Time Domain Analysis",
];

pub const QUESTION_POOL: [&str; 5] = [
    "Define transfer function and explain its significance.",
    "Explain closed loop control system with example.",
    "Differentiate open loop and closed loop systems.",
    "What are poles and zeros? Explain their effect.",
    "Explain stability criteria in control systems.",
];

pub const TOPICS_PER_LECTURE: usize = 4;
pub const QUESTIONS_PER_LECTURE: usize = 4;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn new_lecture_id() -> String {
    format!("lec_{}", Uuid::new_v4().simple())
}

pub fn generate_notes(video_name: &str) -> LectureDraft {
    generate_notes_with(video_name, &mut rand::rng())
}

/// Same as [`generate_notes`] with a caller-supplied random source.
pub fn generate_notes_with<R: Rng + ?Sized>(video_name: &str, rng: &mut R) -> LectureDraft {
    let date = Local::now().format(DATE_FORMAT).to_string();

    LectureDraft {
        id: new_lecture_id(),
        title: video_name.to_string(),
        summary: format!(
            "This offline AI-generated summary is created specifically for the video '{}' on {}.",
            video_name, date
        ),
        date,
        important_topics: sample(&TOPIC_POOL, TOPICS_PER_LECTURE, rng),
        exam_questions: sample(&QUESTION_POOL, QUESTIONS_PER_LECTURE, rng),
        segments: outline(video_name),
    }
}

fn sample<R: Rng + ?Sized>(pool: &[&str], take: usize, rng: &mut R) -> Vec<String> {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.into_iter().take(take).map(String::from).collect()
}

fn outline(video_name: &str) -> Vec<Segment> {
    vec![
        segment(
            "00:20",
            format!("Introduction to {}", video_name),
            &["Overview of the lecture", "Importance of the subject"],
        ),
        segment(
            "01:30",
            "Core Concepts".to_string(),
            &["Basic system definition", "Real-world applications"],
        ),
        segment(
            "03:10",
            "Exam Focus".to_string(),
            &["Frequently asked theory", "Common mistakes in exams"],
        ),
    ]
}

fn segment(display_time: &str, title: String, content: &[&str]) -> Segment {
    Segment {
        display_time: display_time.to_string(),
        title,
        content: content.iter().map(|c| c.to_string()).collect(),
    }
}
