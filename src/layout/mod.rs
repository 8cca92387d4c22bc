//! Column-flow layout for reference sheets.
//!
//! A sheet is a flat sequence of blocks (section headers, sub-headers, code, body text,
//! labeled lists, and spacers) poured into a fixed number of equal-width columns. The
//! [LayoutEngine](crate::layout::LayoutEngine) keeps a [Cursor](crate::layout::Cursor) at the
//! next free spot, works out how tall each block is before drawing it, and moves on to the
//! next column (and eventually the next page) whenever a block wouldn't fit.
//!
//! # Example
//!
//! ```
//! use pdf_quickref::canvas::{Canvas, RecordingCanvas};
//! use pdf_quickref::layout::{ColumnGrid, LayoutEngine, LayoutOptions};
//! use pdf_quickref::pagesize::{PageOrientation, LETTER};
//! use pdf_quickref::Mm;
//!
//! let page = LETTER.landscape();
//! let grid = ColumnGrid::new(page, Mm(6.0), 3, Mm(4.0), Mm(18.0)).expect("valid geometry");
//! let mut engine = LayoutEngine::new(RecordingCanvas::new(page), grid, LayoutOptions::default());
//!
//! engine.begin_document("Rust Collections");
//! engine.place_section_header("Vec<T>");
//! engine.place_sub_header("Creating");
//! engine.place_code_block(&["let v = vec![1, 2, 3];", "let w: Vec<u8> = Vec::new();"]);
//! engine.place_labeled_list("Methods:", &["push", "pop", "len", "iter"]);
//!
//! let canvas = engine.finish();
//! assert_eq!(canvas.page_count(), 1);
//! ```

mod cursor;
pub use cursor::*;

mod engine;
pub use engine::*;

mod grid;
pub use grid::*;

mod metrics;
pub use metrics::*;

/// Measuring, truncating, and wrapping single lines of text
pub mod text;
