use lecturai::Config;
use rocket::{
    http::{ContentType, Status},
    local::blocking::Client,
};
use server::ServerOptions;
use tempfile::TempDir;

const BOUNDARY: &str = "X-LECTURAI-BOUNDARY";

fn client(dir: &TempDir) -> Client {
    let config = Config::new(dir.path());
    Client::tracked(server::build(config, ServerOptions::default())).expect("valid rocket instance")
}

fn multipart(file_name: &str, data: &[u8]) -> (ContentType, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"video\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    let content_type = ContentType::new("multipart", "form-data").with_params(("boundary", BOUNDARY));
    (content_type, body)
}

fn stored_ids(dir: &TempDir) -> Vec<String> {
    let raw = std::fs::read_to_string(dir.path().join("local_db.json")).unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    records
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

fn page(client: &Client) -> String {
    let response = client.get("/").dispatch();
    assert_eq!(response.status(), Status::Ok);
    response.into_string().unwrap()
}

#[test]
fn starts_on_empty_dashboard() {
    let dir = TempDir::new().unwrap();
    let client = client(&dir);

    let html = page(&client);
    assert!(html.contains("Dashboard"));
    assert!(html.contains("Lectures Stored<strong>0</strong>"));
}

#[test]
fn sidebar_switches_views() {
    let dir = TempDir::new().unwrap();
    let client = client(&dir);

    let response = client.post("/nav/storage").dispatch();
    assert_eq!(response.status(), Status::SeeOther);
    assert!(page(&client).contains("Storage Manager"));

    client.post("/nav/upload").dispatch();
    let html = page(&client);
    assert!(html.contains("Process Video"));
    assert!(html.contains("accept=\".mp4,.avi,.mov\""));

    let response = client.post("/nav/notes").dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn opening_unknown_lecture_is_not_found() {
    let dir = TempDir::new().unwrap();
    let client = client(&dir);

    let response = client.post("/lectures/lec_missing/open").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    assert!(page(&client).contains("Lectures Stored"));
}

#[test]
fn upload_view_and_delete_round() {
    let dir = TempDir::new().unwrap();
    let client = client(&dir);
    let video = vec![7u8; 2048];

    let (content_type, body) = multipart("Lecture1.mp4", &video);
    let response = client.post("/upload").header(content_type).body(body).dispatch();
    assert_eq!(response.status(), Status::SeeOther);

    let html = page(&client);
    assert!(html.contains("<h1>Lecture1.mp4</h1>"));
    assert!(html.contains("Important Topics"));
    assert!(html.contains("Exam-Oriented Questions"));

    let ids = stored_ids(&dir);
    assert_eq!(ids.len(), 1);
    let id = &ids[0];

    let response = client.get(format!("/videos/{}", id)).dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_bytes().unwrap(), video);

    let response = client.get(format!("/lectures/{}/export", id)).dispatch();
    if cfg!(feature = "pdf") {
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::PDF));
        assert!(response.into_bytes().unwrap().starts_with(b"%PDF"));
    } else {
        assert_eq!(response.status(), Status::NotFound);
    }

    let response = client.post(format!("/lectures/{}/delete", id)).dispatch();
    assert_eq!(response.status(), Status::SeeOther);
    assert!(stored_ids(&dir).is_empty());
    assert!(!dir.path().join("saved_videos").join("Lecture1.mp4").exists());
    assert!(page(&client).contains("Lectures Stored<strong>0</strong>"));

    let response = client.get(format!("/videos/{}", id)).dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn rejects_non_video_upload() {
    let dir = TempDir::new().unwrap();
    let client = client(&dir);

    let (content_type, body) = multipart("notes.pdf", b"not a video");
    let response = client.post("/upload").header(content_type).body(body).dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    assert!(!dir.path().join("local_db.json").exists());
}
