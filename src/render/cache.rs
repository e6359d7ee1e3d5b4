use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{LectureRecord, RenderError};

pub const DEFAULT_EXPORT_CACHE_SIZE: usize = 16;

/// Rendered PDFs keyed by lecture id. Lectures never change after upload, so an
/// entry only goes stale when its lecture is deleted.
pub struct ExportCache {
    rendered: Mutex<LruCache<String, Arc<Vec<u8>>>>,
}

impl ExportCache {
    pub fn new(cache_size: usize) -> Self {
        let capacity = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            rendered: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Cached bytes for `lecture`, rendering them with `render` on a miss.
    /// Render failures are not cached.
    pub async fn get_or_render<F>(&self, lecture: &LectureRecord, render: F) -> Result<Arc<Vec<u8>>, RenderError>
    where
        F: FnOnce(&LectureRecord) -> Result<Vec<u8>, RenderError>,
    {
        let mut rendered = self.rendered.lock().await;
        if let Some(data) = rendered.get(&lecture.id) {
            debug!(id = %lecture.id, "export cache hit");
            return Ok(Arc::clone(data));
        }

        let data = Arc::new(render(lecture)?);
        debug!(id = %lecture.id, bytes = data.len(), cached = rendered.len(), "export cache miss, rendered");
        rendered.put(lecture.id.clone(), Arc::clone(&data));
        Ok(data)
    }

    /// Forgets the export of a deleted lecture.
    pub async fn invalidate(&self, id: &str) {
        if self.rendered.lock().await.pop(id).is_some() {
            debug!(id, "dropped cached export");
        }
    }
}

impl Default for ExportCache {
    fn default() -> Self {
        Self::new(DEFAULT_EXPORT_CACHE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn lecture(id: &str) -> LectureRecord {
        LectureRecord {
            id: id.to_string(),
            title: format!("{}.mp4", id),
            date: "2026-10-19 09:00:00".to_string(),
            summary: String::new(),
            important_topics: Vec::new(),
            exam_questions: Vec::new(),
            segments: Vec::new(),
            file_path: format!("saved_videos/{}.mp4", id),
            file_size: "1.00 KB".to_string(),
        }
    }

    #[tokio::test]
    async fn renders_once_per_lecture() {
        let cache = ExportCache::default();
        let renders = Cell::new(0);
        let render = |l: &LectureRecord| -> Result<Vec<u8>, RenderError> {
            renders.set(renders.get() + 1);
            Ok(l.id.as_bytes().to_vec())
        };

        let first = cache.get_or_render(&lecture("a"), render).await.unwrap();
        let second = cache.get_or_render(&lecture("a"), render).await.unwrap();

        assert_eq!(renders.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn evicts_least_recently_used() {
        let cache = ExportCache::new(2);
        let renders = Cell::new(0);
        let render = |_: &LectureRecord| -> Result<Vec<u8>, RenderError> {
            renders.set(renders.get() + 1);
            Ok(vec![1])
        };

        cache.get_or_render(&lecture("a"), render).await.unwrap();
        cache.get_or_render(&lecture("b"), render).await.unwrap();
        cache.get_or_render(&lecture("a"), render).await.unwrap();
        cache.get_or_render(&lecture("c"), render).await.unwrap();
        assert_eq!(renders.get(), 3);

        cache.get_or_render(&lecture("a"), render).await.unwrap();
        assert_eq!(renders.get(), 3);
        cache.get_or_render(&lecture("b"), render).await.unwrap();
        assert_eq!(renders.get(), 4);
    }

    #[tokio::test]
    async fn failures_and_invalidated_entries_render_again() {
        let cache = ExportCache::default();
        let failed = cache
            .get_or_render(&lecture("a"), |_| Err(RenderError::Pdf("broken".into())))
            .await;
        assert!(failed.is_err());

        let ok = cache.get_or_render(&lecture("a"), |_| Ok(vec![1])).await.unwrap();
        assert_eq!(ok.as_slice(), &[1]);

        cache.invalidate("a").await;
        let again = cache.get_or_render(&lecture("a"), |_| Ok(vec![2])).await.unwrap();
        assert_eq!(again.as_slice(), &[2]);
    }
}
