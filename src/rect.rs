use crate::units::*;

/// A rectangle on a page, specified by two opposite corners in millimetres. Unlike PDF space,
/// the origin is the top-left corner of the page and `y` grows downwards, so `(x1, y1)` is the
/// top-left corner and `(x2, y2)` the bottom-right one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge
    pub x1: Mm,
    /// The y-coordinate of the top edge
    pub y1: Mm,
    /// The x-coordinate of the right edge
    pub x2: Mm,
    /// The y-coordinate of the bottom edge
    pub y2: Mm,
}

impl Rect {
    /// Create a rectangle from its top-left corner and its size
    pub fn xywh(x: Mm, y: Mm, width: Mm, height: Mm) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> Mm {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Mm {
        self.y2 - self.y1
    }

    /// Whether `other` lies entirely within this rectangle (edges inclusive)
    pub fn contains(&self, other: &Rect) -> bool {
        other.x1 >= self.x1 && other.x2 <= self.x2 && other.y1 >= self.y1 && other.y2 <= self.y2
    }

    /// Flip the rectangle into PDF user space (points, origin at the bottom-left) for a page
    /// that is `page_height` tall
    pub fn to_pdf(&self, page_height: Mm) -> pdf_writer::Rect {
        let x1: Pt = self.x1.into();
        let x2: Pt = self.x2.into();
        let y1: Pt = (page_height - self.y2).into();
        let y2: Pt = (page_height - self.y1).into();
        pdf_writer::Rect {
            x1: *x1,
            y1: *y1,
            x2: *x2,
            y2: *y2,
        }
    }
}
