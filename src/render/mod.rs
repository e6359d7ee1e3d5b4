pub mod cache;
pub mod document;
pub mod layout;
#[cfg(feature = "pdf")]
pub mod pdf;

pub use cache::ExportCache;
pub use document::{layout_lecture, HEADER_TEXT};
pub use layout::{Page, PageSetup};

use crate::{LectureRecord, RenderError};

/// Whether this build can produce PDF exports.
pub fn is_available() -> bool {
    cfg!(feature = "pdf")
}

/// Renders the printable notes for `lecture` as PDF bytes.
///
/// Returns [`RenderError::Unavailable`] when the crate is built without the
/// `pdf` feature; callers should then hide any export action.
pub fn render_pdf(lecture: &LectureRecord) -> Result<Vec<u8>, RenderError> {
    #[cfg(feature = "pdf")]
    {
        let setup = PageSetup::default();
        let pages = layout_lecture(lecture, setup);
        pdf::write_pdf(&lecture.title, &setup, &pages)
    }

    #[cfg(not(feature = "pdf"))]
    {
        let _ = lecture;
        Err(RenderError::Unavailable)
    }
}
