//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between
//! portrait and landscape. Cheat sheets are usually printed landscape.
//!
//! # Example
//!
//! ```
//! use pdf_quickref::pagesize::{LETTER, PageOrientation};
//!
//! let (width, height) = LETTER.landscape();
//! assert!(width > height);
//! ```

use crate::units::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Page dimensions as (width, height) in millimetres.
pub type PageSize = (Mm, Mm);

pub const LETTER: PageSize = (Mm(215.9), Mm(279.4));
pub const LEGAL: PageSize = (Mm(215.9), Mm(355.6));
pub const TABLOID: PageSize = (Mm(279.4), Mm(431.8));
pub const A3: PageSize = (Mm(297.0), Mm(420.0));
pub const A4: PageSize = (Mm(210.0), Mm(297.0));
pub const A5: PageSize = (Mm(148.0), Mm(210.0));

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

/// The paper formats that can be selected by name in a configuration file
#[derive(Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum Paper {
    #[default]
    Letter,
    Legal,
    Tabloid,
    A3,
    A4,
    A5,
}

impl Paper {
    /// The portrait dimensions of the paper
    pub fn size(&self) -> PageSize {
        match self {
            Paper::Letter => LETTER,
            Paper::Legal => LEGAL,
            Paper::Tabloid => TABLOID,
            Paper::A3 => A3,
            Paper::A4 => A4,
            Paper::A5 => A5,
        }
    }
}

impl fmt::Display for Paper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Paper::Letter => "letter",
            Paper::Legal => "legal",
            Paper::Tabloid => "tabloid",
            Paper::A3 => "a3",
            Paper::A4 => "a4",
            Paper::A5 => "a5",
        };
        write!(f, "{name}")
    }
}
