//! The four-view UI state machine.
//!
//! [`Controller`] owns the session (current view and selected lecture) next to
//! the in-memory lecture list. Front ends call one action per user interaction
//! and then render [`Controller::screen`].

use std::{path::PathBuf, sync::Arc};

use tracing::{debug, info, warn};

use crate::{
    format::{export_file_name, format_bytes},
    notes,
    render::{self, ExportCache},
    storage::{JsonFileStore, LectureStore, VideoDirectory},
    AppError, Config, LectureRecord, Result, VideoType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Upload,
    Notes,
    Storage,
}

impl View {
    pub const SIDEBAR: [View; 3] = [View::Dashboard, View::Upload, View::Storage];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Upload => "upload",
            View::Notes => "notes",
            View::Storage => "storage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Upload => "Upload",
            View::Notes => "Notes",
            View::Storage => "Storage",
        }
    }

    /// Views reachable from the sidebar. `notes` needs a selection and is not
    /// one of them.
    pub fn from_sidebar(name: &str) -> Option<View> {
        View::SIDEBAR.into_iter().find(|v| v.as_str() == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub view: View,
    pub selected: Option<String>,
}

/// What the current view shows.
#[derive(Debug)]
pub enum Screen<'a> {
    Dashboard {
        lectures: &'a [LectureRecord],
    },
    Upload {
        accepted: &'static [&'static str],
    },
    Notes {
        lecture: &'a LectureRecord,
        export_available: bool,
    },
    Storage {
        lectures: &'a [LectureRecord],
    },
}

#[derive(Debug, Clone)]
pub struct Export {
    pub file_name: String,
    pub data: Arc<Vec<u8>>,
}

pub struct Controller<S = JsonFileStore> {
    store: S,
    videos: VideoDirectory,
    session: Session,
    lectures: Vec<LectureRecord>,
    exports: ExportCache,
}

impl Controller<JsonFileStore> {
    /// Opens the store and video directory under `config.data_dir`.
    pub async fn open(config: &Config) -> Result<Self> {
        let store = JsonFileStore::new(config.db_path());
        let videos = VideoDirectory::new(&config.data_dir).await?;
        let controller = Self::new(store, videos)
            .await
            .with_export_cache(config.export_cache_size);
        Ok(controller)
    }
}

impl<S: LectureStore> Controller<S> {
    pub async fn new(store: S, videos: VideoDirectory) -> Self {
        let lectures = store.load().await;
        info!(count = lectures.len(), "loaded lecture store");
        Self {
            store,
            videos,
            session: Session::default(),
            lectures,
            exports: ExportCache::default(),
        }
    }

    pub fn with_export_cache(mut self, cache_size: usize) -> Self {
        self.exports = ExportCache::new(cache_size);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn lectures(&self) -> &[LectureRecord] {
        &self.lectures
    }

    pub fn lecture(&self, id: &str) -> Option<&LectureRecord> {
        self.lectures.iter().find(|l| l.id == id)
    }

    pub fn selected(&self) -> Option<&LectureRecord> {
        self.session.selected.as_deref().and_then(|id| self.lecture(id))
    }

    /// Where the video of lecture `id` lives on disk.
    pub fn video_path(&self, id: &str) -> Option<PathBuf> {
        self.lecture(id).map(|l| self.videos.resolve(&l.file_path))
    }

    pub fn export_available(&self) -> bool {
        render::is_available()
    }

    pub fn navigate(&mut self, view: View) {
        debug!(from = self.session.view.as_str(), to = view.as_str(), "navigate");
        self.session.view = view;
    }

    pub fn open_lecture(&mut self, id: &str) -> Result<()> {
        if self.lecture(id).is_none() {
            return Err(AppError::NotFound(id.to_string()));
        }
        self.session.selected = Some(id.to_string());
        self.session.view = View::Notes;
        Ok(())
    }

    pub fn back(&mut self) {
        self.session.view = View::Dashboard;
    }

    /// Stores the video, generates its notes, records the lecture at the front
    /// of the store and selects it.
    pub async fn upload(&mut self, file_name: &str, data: &[u8]) -> Result<LectureRecord> {
        let name = upload_name(file_name)?;
        let video_type = VideoType::from_file_name(&name).ok_or_else(|| {
            AppError::Validation(format!(
                "{} is not a supported video; expected one of {}",
                name,
                VideoType::ACCEPTED_EXTENSIONS.join(", ")
            ))
        })?;

        let stored = self.videos.store(&name, data).await?;
        let lecture = notes::generate_notes(&name)
            .into_record(stored.file_path.clone(), format_bytes(stored.size));

        let mut records = self.store.load().await;
        records.insert(0, lecture.clone());
        if let Err(e) = self.store.save(&records).await {
            // An overwritten video still belongs to an earlier record.
            if !stored.replaced {
                if let Err(cleanup) = self.videos.remove(&stored.file_path).await {
                    warn!(error = %cleanup, path = %stored.file_path, "failed to remove unrecorded video");
                }
            }
            return Err(e.into());
        }
        self.lectures = records;

        info!(
            id = %lecture.id,
            title = %lecture.title,
            size = %lecture.file_size,
            mime = video_type.mime_type(),
            "stored lecture"
        );

        self.session.selected = Some(lecture.id.clone());
        self.session.view = View::Notes;
        Ok(lecture)
    }

    /// Deletes a lecture and its video, then returns to the dashboard.
    ///
    /// An unknown id changes nothing on disk and yields `Ok(None)`.
    pub async fn delete(&mut self, id: &str) -> Result<Option<LectureRecord>> {
        let removed = self.store.delete(id, &self.videos).await?;

        if removed.is_some() {
            self.exports.invalidate(id).await;
            if self.session.selected.as_deref() == Some(id) {
                self.session.selected = None;
            }
        }

        self.lectures = self.store.load().await;
        self.session.view = View::Dashboard;
        Ok(removed)
    }

    pub fn screen(&self) -> Screen<'_> {
        match self.session.view {
            View::Dashboard => Screen::Dashboard {
                lectures: &self.lectures,
            },
            View::Upload => Screen::Upload {
                accepted: &VideoType::ACCEPTED_EXTENSIONS,
            },
            View::Notes => match self.selected() {
                Some(lecture) => Screen::Notes {
                    lecture,
                    export_available: self.export_available(),
                },
                None => {
                    warn!(selected = ?self.session.selected, "notes view without a lecture, showing dashboard");
                    Screen::Dashboard {
                        lectures: &self.lectures,
                    }
                }
            },
            View::Storage => Screen::Storage {
                lectures: &self.lectures,
            },
        }
    }

    /// PDF notes for a lecture, rendered once and then served from the cache.
    pub async fn export(&self, id: &str) -> Result<Export> {
        let lecture = self
            .lecture(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        let file_name = export_file_name(&lecture.id, &lecture.title);

        let data = self.exports.get_or_render(lecture, render::render_pdf).await?;
        Ok(Export { file_name, data })
    }
}

/// Strips any directory part a browser or shell may send along with the name.
fn upload_name(raw: &str) -> Result<String> {
    let name = raw
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        return Err(AppError::Validation(format!("invalid file name {:?}", raw)));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_name_drops_directories() {
        assert_eq!(upload_name("Lecture1.mp4").unwrap(), "Lecture1.mp4");
        assert_eq!(upload_name("../../etc/x.mp4").unwrap(), "x.mp4");
        assert_eq!(upload_name("C:\\fakepath\\week 2.mov").unwrap(), "week 2.mov");
    }

    #[test]
    fn upload_name_rejects_empty() {
        assert!(matches!(upload_name(""), Err(AppError::Validation(_))));
        assert!(matches!(upload_name("videos/"), Err(AppError::Validation(_))));
        assert!(matches!(upload_name(".."), Err(AppError::Validation(_))));
    }

    #[test]
    fn sidebar_only_exposes_three_views() {
        assert_eq!(View::from_sidebar("upload"), Some(View::Upload));
        assert_eq!(View::from_sidebar("storage"), Some(View::Storage));
        assert_eq!(View::from_sidebar("dashboard"), Some(View::Dashboard));
        assert_eq!(View::from_sidebar("notes"), None);
    }
}
