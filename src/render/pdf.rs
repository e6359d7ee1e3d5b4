use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use super::layout::{to_latin1_lossy, FontStyle, Page, PageSetup};
use crate::RenderError;

const LAYER: &str = "Notes";

fn pdf_error<E: std::fmt::Debug>(err: E) -> RenderError {
    RenderError::Pdf(format!("{:?}", err))
}

/// Draws already laid-out pages with the built-in Helvetica family.
pub fn write_pdf(title: &str, setup: &PageSetup, pages: &[Page]) -> Result<Vec<u8>, RenderError> {
    let title = to_latin1_lossy(title);
    let (doc, first_page, first_layer) =
        PdfDocument::new(title.as_str(), Mm(setup.width), Mm(setup.height), LAYER);

    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?;
    let italic = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .map_err(pdf_error)?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(setup.width), Mm(setup.height), LAYER)
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for run in &page.runs {
            let font: &IndirectFontRef = match run.style {
                FontStyle::Regular => &regular,
                FontStyle::Bold => &bold,
                FontStyle::Italic => &italic,
            };
            layer.use_text(
                run.text.as_str(),
                run.size,
                Mm(run.x),
                Mm(setup.height - run.baseline),
                font,
            );
        }
    }

    doc.save_to_bytes().map_err(pdf_error)
}
