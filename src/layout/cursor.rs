use crate::units::*;

/// Where the next block will be written
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cursor {
    /// 0-based index of the page on the canvas
    pub page: usize,
    /// 0-based column on the page; always less than the grid's column count
    pub column: usize,
    /// Distance from the top of the page; only grows while the cursor stays in a column
    pub offset: Mm,
}

impl Cursor {
    /// Whether the cursor is in the same page and column as `header`
    pub fn is_at(&self, header: &PendingHeader) -> bool {
        self.page == header.page && self.column == header.column
    }
}

/// A sub-header that has been drawn but has nothing beneath it yet. If the block that follows
/// doesn't fit under it, the header is moved along with that block.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingHeader {
    pub title: String,
    /// Offset of the top of the header band
    pub offset: Mm,
    pub page: usize,
    pub column: usize,
}

/// What the engine did with a block
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub page: usize,
    pub column: usize,
    /// Offset of the top edge of the block
    pub top: Mm,
    /// The height the block reserved in its column
    pub height: Mm,
}

impl Placement {
    pub fn bottom(&self) -> Mm {
        self.top + self.height
    }
}
