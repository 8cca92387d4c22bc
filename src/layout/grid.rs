use crate::pagesize::PageSize;
use crate::units::*;
use crate::QuickRefError;

/// The fixed geometry of a sheet: page size, margin, and the columns content flows through.
/// Computed once when the layout engine is built and never changed afterwards.
///
/// All offsets are measured from the top of the page. Content occupies the vertical band from
/// [ColumnGrid::content_top] down to [ColumnGrid::content_bottom]; everything above it
/// belongs to the page banner and everything below it to the footer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColumnGrid {
    page_width: Mm,
    page_height: Mm,
    margin: Mm,
    columns: usize,
    gap: Mm,
    column_width: Mm,
    content_top: Mm,
}

impl ColumnGrid {
    /// Divide the page into `columns` equal columns separated by `gap`, inside `margin` on the
    /// left, right, and bottom. Content starts `content_top` from the top edge of the page.
    pub fn new(
        page: PageSize,
        margin: Mm,
        columns: usize,
        gap: Mm,
        content_top: Mm,
    ) -> Result<ColumnGrid, QuickRefError> {
        let (page_width, page_height) = page;
        let invalid = |reason: String| Err(QuickRefError::InvalidGeometry { reason });

        if columns == 0 {
            return invalid("a sheet needs at least one column".to_string());
        }
        if margin < Mm(0.0) || gap < Mm(0.0) {
            return invalid(format!(
                "margin ({margin}) and column gap ({gap}) can't be negative"
            ));
        }

        let usable_width = page_width - margin * 2.0;
        let column_width = (usable_width - gap * (columns - 1) as f32) / columns as f32;
        if column_width <= Mm(0.0) {
            return invalid(format!(
                "{columns} columns with a {gap} gap don't fit in {usable_width} of usable width"
            ));
        }
        if content_top >= page_height - margin {
            return invalid(format!(
                "content starts at {content_top}, below the bottom margin at {}",
                page_height - margin
            ));
        }

        Ok(ColumnGrid {
            page_width,
            page_height,
            margin,
            columns,
            gap,
            column_width,
            content_top,
        })
    }

    pub fn page_width(&self) -> Mm {
        self.page_width
    }

    pub fn page_height(&self) -> Mm {
        self.page_height
    }

    pub fn margin(&self) -> Mm {
        self.margin
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn column_width(&self) -> Mm {
        self.column_width
    }

    /// The width between the left and right margins
    pub fn usable_width(&self) -> Mm {
        self.page_width - self.margin * 2.0
    }

    /// Where every column starts, on every page
    pub fn content_top(&self) -> Mm {
        self.content_top
    }

    /// Nothing may be drawn below this offset
    pub fn content_bottom(&self) -> Mm {
        self.page_height - self.margin
    }

    /// The full height available to a single column
    pub fn column_height(&self) -> Mm {
        self.content_bottom() - self.content_top
    }

    /// The x-coordinate of the left edge of `column`
    pub fn column_left(&self, column: usize) -> Mm {
        self.margin + (self.column_width + self.gap) * column as f32
    }

    /// Whether a block `height` tall starting at `offset` ends above the bottom margin
    pub fn fits(&self, offset: Mm, height: Mm) -> bool {
        offset + height <= self.content_bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::{PageOrientation, LETTER};

    fn letter_landscape() -> ColumnGrid {
        ColumnGrid::new(LETTER.landscape(), Mm(6.0), 3, Mm(4.0), Mm(18.0))
            .expect("valid geometry")
    }

    #[test]
    fn columns_share_the_usable_width() {
        let grid = letter_landscape();
        let expected = (279.4 - 12.0 - 8.0) / 3.0;
        assert!((grid.column_width().0 - expected).abs() < 1e-3);

        let last_right = grid.column_left(2) + grid.column_width();
        assert!((last_right.0 - (279.4 - 6.0)).abs() < 1e-3);
        assert!((grid.column_left(1).0 - (6.0 + expected + 4.0)).abs() < 1e-3);
    }

    #[test]
    fn can_check_vertical_fit() {
        let grid = letter_landscape();
        assert_eq!(grid.content_bottom(), Mm(215.9 - 6.0));
        assert!(grid.fits(Mm(200.0), Mm(9.0)));
        assert!(!grid.fits(Mm(200.0), Mm(10.0)));
    }

    #[test]
    fn rejects_impossible_geometry() {
        assert!(ColumnGrid::new(LETTER, Mm(6.0), 0, Mm(4.0), Mm(18.0)).is_err());
        assert!(ColumnGrid::new(LETTER, Mm(100.0), 3, Mm(4.0), Mm(18.0)).is_err());
        assert!(ColumnGrid::new(LETTER, Mm(6.0), 3, Mm(4.0), Mm(275.0)).is_err());
        assert!(matches!(
            ColumnGrid::new(LETTER, Mm(6.0), 3, Mm(-1.0), Mm(18.0)),
            Err(QuickRefError::InvalidGeometry { .. })
        ));
    }
}
