use super::layout::{Align, FontStyle, Page, PageSetup, PageWriter};
use crate::LectureRecord;

pub const HEADER_TEXT: &str = "LecturAI Generated Notes";

const HEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 11.0;

/// Lays out the printable notes for one lecture.
pub fn layout_lecture(lecture: &LectureRecord, setup: PageSetup) -> Vec<Page> {
    let mut writer = PageWriter::new(setup, HEADER_TEXT);

    writer.set_font(FontStyle::Bold, 18.0);
    writer.multi_cell(10.0, &lecture.title, Align::Center);

    writer.set_font(FontStyle::Italic, 10.0);
    writer.cell(8.0, &format!("Date: {}", lecture.date), Align::Center);
    writer.ln(5.0);

    heading(&mut writer, "Executive Summary");
    writer.multi_cell(7.0, &lecture.summary, Align::Left);
    writer.ln(4.0);

    heading(&mut writer, "Important Topics");
    bullets(&mut writer, &lecture.important_topics);
    writer.ln(4.0);

    heading(&mut writer, "Exam-Oriented Questions");
    bullets(&mut writer, &lecture.exam_questions);
    writer.ln(4.0);

    writer.set_font(FontStyle::Bold, HEADING_SIZE);
    writer.cell(10.0, "Detailed Notes", Align::Left);
    writer.ln(3.0);

    for segment in &lecture.segments {
        writer.set_font(FontStyle::Bold, 12.0);
        writer.multi_cell(
            8.0,
            &format!("[{}] {}", segment.display_time, segment.title),
            Align::Left,
        );
        bullets(&mut writer, &segment.content);
        writer.ln(2.0);
    }

    writer.finish()
}

fn heading(writer: &mut PageWriter, text: &str) {
    writer.set_font(FontStyle::Bold, HEADING_SIZE);
    writer.cell(10.0, text, Align::Left);
    writer.set_font(FontStyle::Regular, BODY_SIZE);
}

fn bullets(writer: &mut PageWriter, items: &[String]) {
    writer.set_font(FontStyle::Regular, BODY_SIZE);
    for item in items {
        writer.multi_cell(6.0, &format!("- {}", item), Align::Left);
    }
}
