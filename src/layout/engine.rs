use super::cursor::{Cursor, PendingHeader, Placement};
use super::grid::ColumnGrid;
use super::metrics::BlockMetrics;
use super::text::{char_budget, estimate_lines, truncate_chars, truncate_to_width, wrap_words};
use crate::canvas::{Canvas, TOTAL_PAGES_ALIAS};
use crate::colour::Colour;
use crate::rect::Rect;
use crate::style::{Align, TextStyle, Theme};
use crate::units::*;
use serde::{Deserialize, Serialize};

const CONTINUED: &str = " (cont.)";

/// How lines of code are clipped to the width of their column
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeTruncation {
    /// Keep as many characters as there is room for glyphs as wide as `M`. Exact for
    /// fixed-width faces and never measures individual lines.
    #[default]
    Estimated,
    /// Measure each line and drop trailing characters until it fits
    Measured,
}

/// Behaviour switches and styling for a [LayoutEngine]
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct LayoutOptions {
    /// Move sub-headers that would be stranded at the bottom of a column along with the
    /// block that follows them
    pub orphan_correction: bool,
    pub code_truncation: CodeTruncation,
    /// Draw `Page n/{nb}` at the bottom of every page
    pub footer: bool,
    pub theme: Theme,
    pub metrics: BlockMetrics,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            orphan_correction: true,
            code_truncation: CodeTruncation::default(),
            footer: true,
            theme: Theme::default(),
            metrics: BlockMetrics::default(),
        }
    }
}

/// Flows a sequence of blocks down the columns of a [ColumnGrid], starting new columns and
/// pages as they fill up.
///
/// Blocks are never split between columns: before anything is drawn the engine works out how
/// tall the block will be, and if it would cross the bottom margin the whole block moves to the
/// top of the next column (or the first column of a new page, whose banner carries the current
/// title marked as continued). A block that is taller than an entire column is drawn at the top
/// of a column and clipped at the bottom margin.
///
/// Placement never fails; the only fallible step is writing out whatever the canvas produced.
pub struct LayoutEngine<C: Canvas> {
    canvas: C,
    grid: ColumnGrid,
    options: LayoutOptions,
    cursor: Cursor,
    pending: Option<PendingHeader>,
    title: String,
}

impl<C: Canvas> LayoutEngine<C> {
    pub fn new(canvas: C, grid: ColumnGrid, options: LayoutOptions) -> LayoutEngine<C> {
        let (width, height) = canvas.page_size();
        if width != grid.page_width() || height != grid.page_height() {
            tracing::warn!(
                canvas_width = %width,
                canvas_height = %height,
                grid_width = %grid.page_width(),
                grid_height = %grid.page_height(),
                "column grid was built for a different page size than the canvas"
            );
        }

        let cursor = Cursor {
            page: 0,
            column: 0,
            offset: grid.content_top(),
        };
        LayoutEngine {
            canvas,
            grid,
            options,
            cursor,
            pending: None,
            title: String::new(),
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The sub-header drawn most recently, if nothing has been placed beneath it yet
    pub fn pending_header(&self) -> Option<&PendingHeader> {
        self.pending.as_ref()
    }

    pub fn grid(&self) -> &ColumnGrid {
        &self.grid
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// The title shown in the banner of the current page
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Stop laying out and hand back the canvas
    pub fn finish(self) -> C {
        tracing::debug!(pages = self.canvas.page_count(), "layout finished");
        self.canvas
    }

    /// Start the first page of the document
    pub fn begin_document(&mut self, title: &str) {
        if self.canvas.page_count() > 0 {
            tracing::warn!(title, "document already begun, starting a new page instead");
        }
        self.start_page(title);
    }

    /// Start a new page titled `title`, whether or not the current one is full
    pub fn force_new_page(&mut self, title: &str) {
        self.start_page(title);
    }

    /// A full-width coloured band that opens a new topic
    pub fn place_section_header(&mut self, title: &str) -> Placement {
        self.ensure_started();
        self.pending = None;

        let metrics = self.options.metrics;
        let theme = self.options.theme;
        self.ensure_space(metrics.section_reserve);
        let top = self.cursor.offset;
        self.draw_band(
            top,
            metrics.section_band,
            theme.section_fill,
            title,
            theme.section_text,
        );
        self.advance_to(top + metrics.section_advance);
        self.placement(top, metrics.section_reserve)
    }

    /// A lighter band introducing the block that follows it. The header only starts if there
    /// is room for it and the first couple of lines beneath it.
    pub fn place_sub_header(&mut self, title: &str) -> Placement {
        self.ensure_started();
        self.pending = None;

        let metrics = self.options.metrics;
        self.ensure_space(metrics.subsection_reserve);
        let top = self.cursor.offset;
        self.draw_sub_header(top, title);
        self.advance_to(top + metrics.subsection_advance);

        if self.options.orphan_correction {
            self.pending = Some(PendingHeader {
                title: title.to_string(),
                offset: top,
                page: self.cursor.page,
                column: self.cursor.column,
            });
        }
        self.placement(top, metrics.subsection_reserve)
    }

    /// Lines of code on a shaded background, clipped to the width of the column
    pub fn place_code_block<S: AsRef<str>>(&mut self, lines: &[S]) -> Placement {
        self.ensure_started();
        if lines.is_empty() {
            return self.placement(self.cursor.offset, Mm(0.0));
        }

        let metrics = self.options.metrics;
        let style = self.options.theme.code_text;
        let needed = metrics.code_height(lines.len());
        self.make_room(needed);

        let left = self.grid.column_left(self.cursor.column);
        let width = self.grid.column_width();
        let bottom = self.grid.content_bottom();
        let top = self.cursor.offset;

        self.canvas.fill_rect(
            Rect::xywh(left, top, width, needed.min(bottom - top)),
            self.options.theme.code_fill,
        );

        let available = width - metrics.code_inset * 2.0;
        let budget = char_budget(available, self.canvas.string_width("M", &style));
        let mut y = top + metrics.code_inset;
        let mut drawn = 0;
        for line in lines {
            if y + metrics.code_cell > bottom {
                break;
            }
            let line = line.as_ref();
            let text = match self.options.code_truncation {
                CodeTruncation::Estimated => truncate_chars(line, budget),
                CodeTruncation::Measured => truncate_to_width(line, available, |s| {
                    self.canvas.string_width(s, &style)
                }),
            };
            self.canvas.text_cell(
                Rect::xywh(left + metrics.code_inset, y, available, metrics.code_cell),
                text,
                &style,
                Align::Left,
            );
            y += metrics.code_line;
            drawn += 1;
        }
        self.warn_if_clipped("code block", drawn, lines.len());

        self.advance_to(top + needed + metrics.code_gap);
        self.placement(top, needed)
    }

    /// Plain paragraph lines. Each line is cut short at the column edge; nothing wraps.
    pub fn place_body_text<S: AsRef<str>>(&mut self, lines: &[S]) -> Placement {
        self.ensure_started();
        if lines.is_empty() {
            return self.placement(self.cursor.offset, Mm(0.0));
        }

        let metrics = self.options.metrics;
        let style = self.options.theme.body_text;
        let needed = metrics.body_height(lines.len());
        self.make_room(needed);

        let left = self.grid.column_left(self.cursor.column) + metrics.body_inset;
        let available = self.grid.column_width() - metrics.body_inset * 2.0;
        let bottom = self.grid.content_bottom();
        let top = self.cursor.offset;

        let mut y = top;
        let mut drawn = 0;
        for line in lines {
            if y + metrics.body_cell > bottom {
                break;
            }
            let text = truncate_to_width(line.as_ref(), available, |s| {
                self.canvas.string_width(s, &style)
            });
            self.canvas.text_cell(
                Rect::xywh(left, y, available, metrics.body_cell),
                text,
                &style,
                Align::Left,
            );
            y += metrics.body_line;
            drawn += 1;
        }
        self.warn_if_clipped("body text", drawn, lines.len());

        self.advance_to(top + needed);
        self.placement(top, needed)
    }

    /// A bold label followed by its items, comma separated, wrapping beside the label
    pub fn place_labeled_list<S: AsRef<str>>(&mut self, label: &str, items: &[S]) -> Placement {
        self.ensure_started();
        self.pending = None;

        let metrics = self.options.metrics;
        let label_style = self.options.theme.list_label;
        let item_style = self.options.theme.list_items;
        let available = self.grid.column_width() - metrics.list_inset * 2.0;

        // a label may take at most half the line, the items need somewhere to go
        let label = truncate_to_width(label, available / 2.0 - metrics.list_label_gap, |s| {
            self.canvas.string_width(s, &label_style)
        });
        let label_width = self.canvas.string_width(label, &label_style)
            + self.canvas.string_width(" ", &label_style)
            + metrics.list_label_gap;
        let item_width = available - label_width;

        let items = items
            .iter()
            .map(|item| item.as_ref())
            .collect::<Vec<&str>>()
            .join(", ");
        let wrapped = wrap_words(&items, item_width, |s| {
            self.canvas.string_width(s, &item_style)
        });

        let total_width = label_width + self.canvas.string_width(&items, &item_style);
        let estimated = estimate_lines(total_width, available);
        let lines = estimated.max(wrapped.len());
        let needed = metrics.list_height(lines);
        tracing::trace!(label, estimated, wrapped = wrapped.len(), "labeled list");

        self.ensure_space(needed);
        let left = self.grid.column_left(self.cursor.column) + metrics.list_inset;
        let bottom = self.grid.content_bottom();
        let top = self.cursor.offset;

        self.canvas.text_cell(
            Rect::xywh(left, top, label_width, metrics.list_label_cell),
            label,
            &label_style,
            Align::Left,
        );
        let mut y = top;
        let mut drawn = 0;
        for line in wrapped.iter() {
            if y + metrics.list_label_cell > bottom {
                break;
            }
            self.canvas.text_cell(
                Rect::xywh(left + label_width, y, item_width, metrics.list_label_cell),
                line,
                &item_style,
                Align::Left,
            );
            y += metrics.list_line;
            drawn += 1;
        }
        self.warn_if_clipped("labeled list", drawn, wrapped.len());

        let written = metrics.list_line * wrapped.len().max(1) as f32;
        self.advance_to(top + written + metrics.list_gap);
        self.placement(top, needed)
    }

    /// Leave a vertical gap, `height` or the default spacer height. A gap never starts a new
    /// column; at the bottom of a column it simply stops at the margin.
    pub fn place_spacer(&mut self, height: Option<Mm>) -> Placement {
        self.ensure_started();
        let height = height
            .unwrap_or(self.options.metrics.spacer)
            .max(Mm(0.0));
        let top = self.cursor.offset;
        self.advance_to(top + height);
        self.placement(top, self.cursor.offset - top)
    }

    fn ensure_started(&mut self) {
        if self.canvas.page_count() == 0 {
            tracing::warn!("placing content before the document was begun");
            self.start_page("");
        }
    }

    fn start_page(&mut self, title: &str) {
        self.canvas.add_page();
        self.pending = None;
        self.title = title.to_string();
        self.cursor = Cursor {
            page: self.canvas.page_count().saturating_sub(1),
            column: 0,
            offset: self.grid.content_top(),
        };
        tracing::debug!(page = self.cursor.page, title, "starting page");
        self.draw_chrome();
    }

    /// Page background, title banner, and footer
    fn draw_chrome(&mut self) {
        let grid = self.grid;
        let metrics = self.options.metrics;
        let theme = self.options.theme;

        self.canvas.fill_rect(
            Rect::xywh(Mm(0.0), Mm(0.0), grid.page_width(), grid.page_height()),
            theme.background,
        );
        self.canvas.fill_rect(
            Rect::xywh(Mm(0.0), Mm(0.0), grid.page_width(), metrics.banner_height),
            theme.banner_fill,
        );
        self.canvas.text_cell(
            Rect::xywh(
                grid.margin(),
                metrics.banner_text_top,
                grid.usable_width(),
                metrics.banner_text_height,
            ),
            &self.title,
            &theme.banner_text,
            Align::Centre,
        );

        if self.options.footer {
            let footer = format!("Page {}/{}", self.cursor.page + 1, TOTAL_PAGES_ALIAS);
            self.canvas.text_cell(
                Rect::xywh(
                    grid.margin(),
                    grid.content_bottom() + metrics.footer_offset,
                    grid.usable_width(),
                    metrics.footer_height,
                ),
                &footer,
                &theme.footer_text,
                Align::Centre,
            );
        }
    }

    /// Move to the top of the next column, or the first column of a new page once the columns
    /// run out
    fn next_column(&mut self) {
        self.cursor.column += 1;
        self.cursor.offset = self.grid.content_top();
        if self.cursor.column >= self.grid.columns() {
            let title = format!("{}{}", self.title.trim_end_matches(CONTINUED), CONTINUED);
            self.start_page(&title);
        } else {
            tracing::debug!(
                page = self.cursor.page,
                column = self.cursor.column,
                "advancing to next column"
            );
        }
    }

    /// Make sure a block `needed` tall can start at the cursor, moving on to a fresh column if
    /// it can't
    fn ensure_space(&mut self, needed: Mm) {
        if self.grid.fits(self.cursor.offset, needed) {
            return;
        }
        // a fresh column is as good as it gets
        if self.cursor.offset > self.grid.content_top() {
            self.next_column();
        }
        if !self.grid.fits(self.cursor.offset, needed) {
            tracing::warn!(
                needed = %needed,
                column_height = %self.grid.column_height(),
                "block is taller than a column and will be clipped"
            );
        }
    }

    /// [LayoutEngine::ensure_space] for blocks that may follow a sub-header. If the block has
    /// to move on and would leave a sub-header alone at the bottom of this column, the header
    /// moves with it.
    fn make_room(&mut self, needed: Mm) {
        let Some(header) = self.pending.take() else {
            self.ensure_space(needed);
            return;
        };

        let stranded = self.cursor.is_at(&header) && !self.grid.fits(self.cursor.offset, needed);
        if !stranded {
            self.ensure_space(needed);
        } else if header.offset > self.grid.content_top() {
            self.relocate_sub_header(header, needed);
        } else {
            // moving a header that already tops its column gains nothing
            tracing::warn!(
                needed = %needed,
                title = %header.title,
                "block beneath sub-header is taller than a column and will be clipped"
            );
        }
    }

    fn relocate_sub_header(&mut self, header: PendingHeader, needed: Mm) {
        let metrics = self.options.metrics;
        tracing::info!(
            title = %header.title,
            page = header.page,
            column = header.column,
            "moving orphaned sub-header"
        );

        self.canvas.fill_rect(
            Rect::xywh(
                self.grid.column_left(header.column),
                header.offset,
                self.grid.column_width(),
                metrics.subsection_band,
            ),
            self.options.theme.background,
        );

        // whatever was placed between the header and this block moves with them
        let gap = (self.cursor.offset - (header.offset + metrics.subsection_advance)).max(Mm(0.0));
        self.cursor.offset = header.offset;
        self.next_column();
        let top = self.cursor.offset;
        self.draw_sub_header(top, &header.title);
        self.advance_to(top + metrics.subsection_advance + gap);

        if !self.grid.fits(self.cursor.offset, needed) {
            tracing::warn!(
                needed = %needed,
                title = %header.title,
                "block beneath moved sub-header doesn't fit a fresh column and will be clipped"
            );
        }
    }

    fn draw_sub_header(&mut self, top: Mm, title: &str) {
        let theme = self.options.theme;
        self.draw_band(
            top,
            self.options.metrics.subsection_band,
            theme.subsection_fill,
            title,
            theme.subsection_text,
        );
    }

    /// A full column-width filled band with a title inset from its left edge
    fn draw_band(&mut self, top: Mm, height: Mm, fill: Colour, title: &str, style: TextStyle) {
        let left = self.grid.column_left(self.cursor.column);
        let width = self.grid.column_width();
        let indent = self.options.metrics.header_indent;

        let band = Rect::xywh(left, top, width, height);
        self.canvas.fill_rect(band, fill);
        let title = truncate_to_width(title, width - indent * 2.0, |s| {
            self.canvas.string_width(s, &style)
        });
        let cell = Rect {
            x1: band.x1 + indent,
            ..band
        };
        self.canvas.text_cell(cell, title, &style, Align::Left);
    }

    /// Move the cursor down to `offset`, never past the bottom margin
    fn advance_to(&mut self, offset: Mm) {
        self.cursor.offset = offset
            .max(self.cursor.offset)
            .min(self.grid.content_bottom());
    }

    fn placement(&self, top: Mm, height: Mm) -> Placement {
        Placement {
            page: self.cursor.page,
            column: self.cursor.column,
            top,
            height,
        }
    }

    fn warn_if_clipped(&self, what: &str, drawn: usize, total: usize) {
        if drawn < total {
            tracing::warn!(
                page = self.cursor.page,
                column = self.cursor.column,
                drawn,
                total,
                "{what} clipped at the bottom margin"
            );
        }
    }
}
