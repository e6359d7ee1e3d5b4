use std::collections::HashSet;

use lecturai::notes::{
    generate_notes, generate_notes_with, DATE_FORMAT, QUESTIONS_PER_LECTURE, QUESTION_POOL,
    TOPICS_PER_LECTURE, TOPIC_POOL,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

proptest! {
    #[test]
    fn notes_sample_distinct_entries_from_pools(seed in any::<u64>(), name in "[A-Za-z0-9 _-]{1,24}\\.mp4") {
        let mut rng = StdRng::seed_from_u64(seed);
        let draft = generate_notes_with(&name, &mut rng);

        prop_assert_eq!(draft.important_topics.len(), TOPICS_PER_LECTURE);
        prop_assert_eq!(draft.exam_questions.len(), QUESTIONS_PER_LECTURE);

        let topics: HashSet<&str> = draft.important_topics.iter().map(String::as_str).collect();
        prop_assert_eq!(topics.len(), TOPICS_PER_LECTURE);
        prop_assert!(topics.iter().all(|t| TOPIC_POOL.contains(t)));

        let questions: HashSet<&str> = draft.exam_questions.iter().map(String::as_str).collect();
        prop_assert_eq!(questions.len(), QUESTIONS_PER_LECTURE);
        prop_assert!(questions.iter().all(|q| QUESTION_POOL.contains(q)));

        prop_assert_eq!(draft.segments.len(), 3);
        prop_assert_eq!(&draft.segments[0].title, &format!("Introduction to {}", name));
        prop_assert_eq!(&draft.title, &name);
    }
}

#[test]
fn outline_is_fixed() {
    let draft = generate_notes("Lecture1.mp4");
    let times: Vec<&str> = draft.segments.iter().map(|s| s.display_time.as_str()).collect();
    let titles: Vec<&str> = draft.segments.iter().map(|s| s.title.as_str()).collect();

    assert_eq!(times, ["00:20", "01:30", "03:10"]);
    assert_eq!(titles, ["Introduction to Lecture1.mp4", "Core Concepts", "Exam Focus"]);
    assert!(draft.segments.iter().all(|s| s.content.len() == 2));
}

#[test]
fn summary_names_video_and_date() {
    let draft = generate_notes("week 3.mov");
    assert!(draft.summary.contains("'week 3.mov'"));
    assert!(draft.summary.ends_with(&format!("on {}.", draft.date)));
    assert!(chrono::NaiveDateTime::parse_from_str(&draft.date, DATE_FORMAT).is_ok());
}

#[test]
fn ids_are_unique() {
    let ids: HashSet<String> = (0..64).map(|_| generate_notes("a.mp4").id).collect();
    assert_eq!(ids.len(), 64);
    assert!(ids.iter().all(|id| id.starts_with("lec_")));
}
