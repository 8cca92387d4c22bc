//! The drawing surface the layout engine paints onto.
//!
//! The engine only ever needs a handful of primitives: filled rectangles, single-line text
//! cells, string measurement, and new pages. [Canvas] captures exactly that, with coordinates
//! in millimetres measured from the top-left corner of the current page. Two implementations
//! ship with the crate:
//!
//! - [`PdfCanvas`](crate::canvas::PdfCanvas) builds a [`Document`](crate::Document) that can be
//!   written out as a PDF
//! - [`RecordingCanvas`](crate::canvas::RecordingCanvas) keeps a log of every draw command,
//!   which is what the layout tests assert against

use crate::colour::Colour;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::style::{Align, TextStyle};
use crate::units::*;

mod pdf;
mod recording;

pub use pdf::*;
pub use recording::*;

/// Placeholder that is replaced by the total number of pages once the document is finished.
/// Useful in footers such as `Page 2/{nb}`, which are drawn before the page count is known.
pub const TOTAL_PAGES_ALIAS: &str = "{nb}";

/// A page-oriented drawing surface. There is no automatic page breaking on a canvas: pages
/// only start when [Canvas::add_page] is called, and all drawing goes to the most recently
/// added page.
pub trait Canvas {
    /// The (width, height) of every page on this canvas
    fn page_size(&self) -> PageSize;

    /// Start a new, empty page. Subsequent drawing goes to this page.
    fn add_page(&mut self);

    /// The number of pages started so far
    fn page_count(&self) -> usize;

    /// Paint a solid rectangle
    fn fill_rect(&mut self, rect: Rect, colour: Colour);

    /// Draw a single line of text inside `cell`, vertically centred. Text is never wrapped or
    /// clipped by the canvas; callers measure and truncate first.
    fn text_cell(&mut self, cell: Rect, text: &str, style: &TextStyle, align: Align);

    /// Measure the width `text` will occupy when drawn in `style`
    fn string_width(&self, text: &str, style: &TextStyle) -> Mm {
        style.width_of(text)
    }
}
