//! Dense, multi-column PDF reference sheets ("cheat sheets").
//!
//! Content is a flat sequence of blocks (section headers, sub-headers, code, body text,
//! labeled lists and spacers) which the [layout::LayoutEngine] pours into a fixed number of
//! columns, starting new columns and pages as they fill up and keeping sub-headers together
//! with whatever follows them. The engine draws onto any [canvas::Canvas]; [canvas::PdfCanvas]
//! turns the result into a PDF using the standard base-14 fonts, so no font files are needed.
//!
//! # Example
//!
//! ```
//! use pdf_quickref::canvas::PdfCanvas;
//! use pdf_quickref::layout::LayoutEngine;
//! use pdf_quickref::sheet::Sheet;
//! use pdf_quickref::SheetConfig;
//!
//! let sheet = Sheet::from_toml(r#"
//! title = "HTTP"
//!
//! [[pages]]
//! title = "Status Codes"
//!
//! [[pages.blocks]]
//! kind = "list"
//! label = "2xx:"
//! items = ["200 OK", "201 Created", "204 No Content"]
//! "#).expect("valid sheet");
//!
//! let config = SheetConfig::default();
//! let grid = config.grid().expect("valid geometry");
//! let mut canvas = PdfCanvas::new(config.page_size());
//! canvas.set_info(sheet.info());
//!
//! let mut engine = LayoutEngine::new(canvas, grid, config.layout_options());
//! sheet.render(&mut engine);
//!
//! let mut pdf: Vec<u8> = Vec::new();
//! engine.finish().write(&mut pdf).expect("can write PDF");
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

mod colour;
pub use colour::*;

pub mod canvas;

mod config;
pub use config::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

/// The content of a sheet, as read from a TOML document
pub mod sheet;

mod style;
pub use style::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
