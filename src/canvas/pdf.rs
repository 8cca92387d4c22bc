use super::Canvas;
use crate::colour::Colour;
use crate::document::Document;
use crate::info::Info;
use crate::page::{Page, SpanLayout};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::style::{Align, TextStyle};
use crate::units::*;
use crate::QuickRefError;
use id_arena::Id;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A [Canvas] that builds up a PDF [Document] in memory. Nothing is written until
/// [PdfCanvas::write] or [PdfCanvas::save] is called.
pub struct PdfCanvas {
    document: Document,
    size: PageSize,
    current: Option<Id<Page>>,
}

impl PdfCanvas {
    pub fn new(size: PageSize) -> PdfCanvas {
        PdfCanvas {
            document: Document::default(),
            size,
            current: None,
        }
    }

    /// Sets the metadata written to the document's information dictionary
    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Render the document and write it to `w`
    pub fn write<W: Write>(self, w: W) -> Result<(), QuickRefError> {
        self.document.write(w)
    }

    /// Render the document and write it to a file at `path`, replacing any existing file
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<(), QuickRefError> {
        let path = path.as_ref();
        let pages = self.document.page_count();
        let mut out = BufWriter::new(File::create(path)?);
        self.write(&mut out)?;
        out.flush()?;
        tracing::info!(path = %path.display(), pages, "wrote document");
        Ok(())
    }

    fn page_height(&self) -> Mm {
        self.size.1
    }

    /// The page currently being drawn on, starting one if drawing happens before any page
    /// was added
    fn current_page(&mut self) -> &mut Page {
        let id = match self.current {
            Some(id) => id,
            None => {
                tracing::debug!("drawing before the first page, starting one");
                let id = self.document.add_page(Page::new(self.size));
                self.current = Some(id);
                id
            }
        };
        &mut self.document.pages[id]
    }
}

impl Canvas for PdfCanvas {
    fn page_size(&self) -> PageSize {
        self.size
    }

    fn add_page(&mut self) {
        let id = self.document.add_page(Page::new(self.size));
        self.current = Some(id);
    }

    fn page_count(&self) -> usize {
        self.document.page_count()
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        let rect = rect.to_pdf(self.page_height());
        self.current_page().add_fill(rect, colour);
    }

    fn text_cell(&mut self, cell: Rect, text: &str, style: &TextStyle, align: Align) {
        if text.is_empty() {
            return;
        }

        // centred text is positioned when the page is written and the page count is known
        let centre_in = match align {
            Align::Left => None,
            Align::Centre => Some(cell.width().into()),
        };
        // baseline sits a little below the middle of the cell so that capitals look centred
        let font_height: Mm = style.size.into();
        let baseline = cell.y1 + cell.height() / 2.0 + font_height * 0.3;
        let page_height = self.page_height();

        self.current_page().add_span(SpanLayout {
            text: text.to_string(),
            font: style.font,
            size: style.size,
            colour: style.colour,
            coords: (cell.x1.into(), (page_height - baseline).into()),
            centre_in,
        });
    }
}
