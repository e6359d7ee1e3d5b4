use lecturai::{AppError, View, VideoType};
use rocket::{
    form::Form,
    fs::{NamedFile, TempFile},
    get,
    http::{ContentType, Header},
    post,
    response::{content::RawHtml, Redirect},
    routes, FromForm, Responder, Route, State,
};
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::{error::ApiError, state::AppState, views};

pub fn routes() -> Vec<Route> {
    routes![index, navigate, open, back, upload, delete, export, video]
}

#[derive(FromForm)]
pub struct UploadForm<'r> {
    video: TempFile<'r>,
}

#[derive(Responder)]
#[response(content_type = "pdf")]
pub struct PdfDownload {
    body: Vec<u8>,
    disposition: Header<'static>,
}

#[get("/")]
async fn index(state: &State<AppState>) -> RawHtml<String> {
    let controller = state.lock().await;
    RawHtml(views::render(&controller))
}

#[post("/nav/<view>")]
async fn navigate(state: &State<AppState>, view: &str) -> Result<Redirect, ApiError> {
    let view = View::from_sidebar(view)
        .ok_or_else(|| AppError::NotFound(format!("view {}", view)))?;
    state.lock().await.navigate(view);
    Ok(Redirect::to("/"))
}

#[post("/lectures/<id>/open")]
async fn open(state: &State<AppState>, id: &str) -> Result<Redirect, ApiError> {
    state.lock().await.open_lecture(id)?;
    Ok(Redirect::to("/"))
}

#[post("/back")]
async fn back(state: &State<AppState>) -> Redirect {
    state.lock().await.back();
    Redirect::to("/")
}

#[post("/upload", data = "<form>")]
async fn upload(state: &State<AppState>, form: Form<UploadForm<'_>>) -> Result<Redirect, ApiError> {
    let file = &form.video;
    let name = file
        .raw_name()
        .map(|n| n.dangerous_unsafe_unsanitized_raw().as_str().to_string())
        .unwrap_or_default();

    let mut data = Vec::with_capacity(file.len() as usize);
    let reader = file.open().await?;
    tokio::pin!(reader);
    reader.read_to_end(&mut data).await?;
    debug!(name = %name, bytes = data.len(), "received upload");

    let lecture = state.lock().await.upload(&name, &data).await?;
    info!(id = %lecture.id, "upload processed");
    Ok(Redirect::to("/"))
}

#[post("/lectures/<id>/delete")]
async fn delete(state: &State<AppState>, id: &str) -> Result<Redirect, ApiError> {
    state.lock().await.delete(id).await?;
    Ok(Redirect::to("/"))
}

#[get("/lectures/<id>/export")]
async fn export(state: &State<AppState>, id: &str) -> Result<PdfDownload, ApiError> {
    let export = state.lock().await.export(id).await?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        header_safe(&export.file_name)
    );

    Ok(PdfDownload {
        body: export.data.as_ref().clone(),
        disposition: Header::new("Content-Disposition", disposition),
    })
}

#[get("/videos/<id>")]
async fn video(state: &State<AppState>, id: &str) -> Option<(ContentType, NamedFile)> {
    let path = state.lock().await.video_path(id)?;
    let content_type = path
        .file_name()
        .and_then(|name| VideoType::from_file_name(&name.to_string_lossy()))
        .and_then(|video_type| ContentType::parse_flexible(video_type.mime_type()))
        .unwrap_or(ContentType::Binary);

    let file = NamedFile::open(&path).await.ok()?;
    Some((content_type, file))
}

/// Keeps a download name to characters that survive a quoted header value.
fn header_safe(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_safe_replaces_quotes_and_unicode() {
        assert_eq!(header_safe("lec_1_Week\"1\".pdf"), "lec_1_Week_1_.pdf");
        assert_eq!(header_safe("lec_2_Ångström.pdf"), "lec_2__ngstr_m.pdf");
    }
}
