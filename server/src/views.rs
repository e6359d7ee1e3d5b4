//! HTML for the four views. Pages are plain server-rendered markup; every
//! action is a form post followed by a redirect back to `/`.

use std::fmt::Write;

use lecturai::{format::export_file_name, Controller, LectureRecord, Screen, View};
use rocket::http::Status;

const STYLE: &str = r#"
body { margin: 0; display: flex; font-family: sans-serif; color: #1f2933; }
nav { width: 200px; min-height: 100vh; background: #f0f2f6; padding: 1rem; box-sizing: border-box; }
nav button { width: 100%; margin-bottom: .5rem; }
nav button.active { font-weight: bold; border-color: #ff4b4b; }
main { flex: 1; padding: 2rem 3rem; max-width: 960px; }
button, a.button { padding: .4rem .9rem; border: 1px solid #ccd; border-radius: 6px; background: #fff; cursor: pointer; text-decoration: none; color: inherit; font-size: .95rem; }
button.danger { color: #b42318; }
.card { display: flex; justify-content: space-between; align-items: center; border: 1px solid #dde; border-radius: 8px; padding: .6rem 1rem; margin: .5rem 0; }
.metric { margin: 1rem 0; }
.metric strong { display: block; font-size: 2rem; }
.info { background: #e8f1fb; border-radius: 8px; padding: 1rem; margin: 1rem 0; }
.size { color: #667; margin-left: auto; margin-right: 1rem; }
video { width: 100%; max-height: 480px; background: #000; }
form.inline { display: inline; }
"#;

/// Escapes text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render(controller: &Controller) -> String {
    let (active, body) = match controller.screen() {
        Screen::Dashboard { lectures } => (View::Dashboard, dashboard(lectures)),
        Screen::Upload { accepted } => (View::Upload, upload(accepted)),
        Screen::Notes {
            lecture,
            export_available,
        } => (View::Notes, notes(lecture, export_available)),
        Screen::Storage { lectures } => (View::Storage, storage(lectures)),
    };
    page(active, &body)
}

pub fn error_page(status: Status, message: &str) -> String {
    let body = format!(
        "<h1>{} {}</h1><p>{}</p><form method=\"post\" action=\"/nav/dashboard\"><button>Return to dashboard</button></form>",
        status.code,
        escape(status.reason().unwrap_or("Error")),
        escape(message)
    );
    page(View::Dashboard, &body)
}

fn page(active: View, body: &str) -> String {
    let mut sidebar = String::from("<h2>&#128218; LecturAI</h2>");
    for view in View::SIDEBAR {
        let class = if view == active { " class=\"active\"" } else { "" };
        let _ = write!(
            sidebar,
            "<form method=\"post\" action=\"/nav/{}\"><button{}>{}</button></form>",
            view.as_str(),
            class,
            view.label()
        );
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>LecturAI - Offline Video Analyzer</title><style>{}</style></head>\
         <body><nav>{}</nav><main>{}</main></body></html>",
        STYLE, sidebar, body
    )
}

fn dashboard(lectures: &[LectureRecord]) -> String {
    let mut html = format!(
        "<h1>&#128202; Dashboard</h1>\
         <div class=\"metric\">Lectures Stored<strong>{}</strong></div>\
         <form method=\"post\" action=\"/nav/upload\"><button>&#128228; Upload New Video</button></form>",
        lectures.len()
    );

    for lecture in lectures {
        let _ = write!(
            html,
            "<div class=\"card\"><span>{}</span>\
             <form class=\"inline\" method=\"post\" action=\"/lectures/{}/open\"><button>Open</button></form></div>",
            escape(&lecture.title),
            escape(&lecture.id)
        );
    }
    html
}

fn upload(accepted: &[&str]) -> String {
    let accept_attr = accepted
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",");
    let accept_label = accepted
        .iter()
        .map(|ext| ext.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "<h1>&#128228; Upload Video</h1>\
         <form method=\"post\" action=\"/upload\" enctype=\"multipart/form-data\">\
         <p><label>Upload video file <input type=\"file\" name=\"video\" accept=\"{}\" required></label></p>\
         <p>Accepted formats: {}</p>\
         <button type=\"submit\">Process Video</button></form>",
        escape(&accept_attr),
        escape(&accept_label)
    )
}

fn notes(lecture: &LectureRecord, export_available: bool) -> String {
    let id = escape(&lecture.id);
    let mut html = format!(
        "<h1>{}</h1><video controls src=\"/videos/{}\"></video><div class=\"info\">{}</div>",
        escape(&lecture.title),
        id,
        escape(&lecture.summary)
    );

    html.push_str("<h2>&#128204; Important Topics</h2>");
    html.push_str(&bullet_list(&lecture.important_topics));
    html.push_str("<h2>&#10067; Exam-Oriented Questions</h2>");
    html.push_str(&bullet_list(&lecture.exam_questions));

    if export_available {
        let _ = write!(
            html,
            "<p><a class=\"button\" href=\"/lectures/{}/export\" download=\"{}\">&#128196; Download Notes as PDF</a></p>",
            id,
            escape(&export_file_name(&lecture.id, &lecture.title))
        );
    }

    html.push_str("<form method=\"post\" action=\"/back\"><button>&#11013; Back</button></form>");
    html
}

fn storage(lectures: &[LectureRecord]) -> String {
    let mut html = String::from("<h1>&#128190; Storage Manager</h1>");
    if lectures.is_empty() {
        html.push_str("<p>No lectures stored.</p>");
    }

    for lecture in lectures {
        let _ = write!(
            html,
            "<div class=\"card\"><span>{}</span><span class=\"size\">{}</span>\
             <form class=\"inline\" method=\"post\" action=\"/lectures/{}/delete\">\
             <button class=\"danger\">Delete</button></form></div>",
            escape(&lecture.title),
            escape(&lecture.file_size),
            escape(&lecture.id)
        );
    }
    html
}

fn bullet_list(items: &[String]) -> String {
    let mut html = String::from("<ul>");
    for item in items {
        let _ = write!(html, "<li>{}</li>", escape(item));
    }
    html.push_str("</ul>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lecture() -> LectureRecord {
        LectureRecord {
            id: "lec_1".into(),
            title: "Week <1> & \"intro\".mp4".into(),
            date: "2026-10-19 09:00:00".into(),
            summary: "Summary".into(),
            important_topics: vec!["Transfer Function".into()],
            exam_questions: vec!["Explain stability criteria in control systems.".into()],
            segments: Vec::new(),
            file_path: "saved_videos/x.mp4".into(),
            file_size: "1.00 KB".into(),
        }
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape("<a href='x'>&\"</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;");
    }

    #[test]
    fn notes_hide_export_when_unavailable() {
        let html = notes(&lecture(), false);
        assert!(!html.contains("/export"));
        assert!(html.contains("Week &lt;1&gt; &amp; &quot;intro&quot;.mp4"));

        let html = notes(&lecture(), true);
        assert!(html.contains("/lectures/lec_1/export"));
    }

    #[test]
    fn dashboard_counts_lectures() {
        let html = dashboard(&[lecture(), lecture()]);
        assert!(html.contains("Lectures Stored<strong>2</strong>"));
        assert_eq!(html.matches("/lectures/lec_1/open").count(), 2);
    }

    #[test]
    fn sidebar_marks_active_view() {
        let html = page(View::Storage, "");
        assert!(html.contains("action=\"/nav/storage\"><button class=\"active\">Storage"));
        assert!(html.contains("action=\"/nav/upload\"><button>Upload"));
    }
}
