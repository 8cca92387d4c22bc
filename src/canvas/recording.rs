use super::Canvas;
use crate::colour::Colour;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::style::{Align, TextStyle};

/// A single call made against a [RecordingCanvas]. Page numbers are 0-based.
#[derive(Clone, PartialEq, Debug)]
pub enum DrawCommand {
    AddPage {
        page: usize,
    },
    FillRect {
        page: usize,
        rect: Rect,
        colour: Colour,
    },
    Text {
        page: usize,
        cell: Rect,
        text: String,
        style: TextStyle,
        align: Align,
    },
}

/// A text draw as seen through [RecordingCanvas::texts]
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RecordedText<'a> {
    pub page: usize,
    pub cell: Rect,
    pub text: &'a str,
    pub style: TextStyle,
}

/// A [Canvas] that renders nothing and instead remembers every call made against it, so the
/// results of a layout can be inspected directly
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    size: PageSize,
    pages: usize,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(size: PageSize) -> RecordingCanvas {
        RecordingCanvas {
            size,
            pages: 0,
            commands: Vec::default(),
        }
    }

    /// Every command in the order it was issued
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every piece of text that was drawn, including text that was later painted over
    pub fn texts(&self) -> Vec<RecordedText<'_>> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text {
                    page,
                    cell,
                    text,
                    style,
                    ..
                } => Some(RecordedText {
                    page: *page,
                    cell: *cell,
                    text: text.as_str(),
                    style: *style,
                }),
                _ => None,
            })
            .collect()
    }

    /// The text that would actually be seen on the finished pages: any text whose cell is
    /// completely covered by a rectangle filled after it is considered hidden
    pub fn visible_texts(&self) -> Vec<RecordedText<'_>> {
        self.commands
            .iter()
            .enumerate()
            .filter_map(|(i, command)| match command {
                DrawCommand::Text {
                    page,
                    cell,
                    text,
                    style,
                    ..
                } => {
                    let covered = self.commands[i + 1..].iter().any(|later| match later {
                        DrawCommand::FillRect {
                            page: fill_page,
                            rect,
                            ..
                        } => fill_page == page && rect.contains(cell),
                        _ => false,
                    });
                    (!covered).then_some(RecordedText {
                        page: *page,
                        cell: *cell,
                        text: text.as_str(),
                        style: *style,
                    })
                }
                _ => None,
            })
            .collect()
    }

    /// Every filled rectangle as `(page, rect, colour)`
    pub fn fills(&self) -> Vec<(usize, Rect, Colour)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillRect { page, rect, colour } => Some((*page, *rect, *colour)),
                _ => None,
            })
            .collect()
    }

    fn current_page(&self) -> usize {
        self.pages.saturating_sub(1)
    }
}

impl Canvas for RecordingCanvas {
    fn page_size(&self) -> PageSize {
        self.size
    }

    fn add_page(&mut self) {
        self.commands.push(DrawCommand::AddPage { page: self.pages });
        self.pages += 1;
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        self.commands.push(DrawCommand::FillRect {
            page: self.current_page(),
            rect,
            colour,
        });
    }

    fn text_cell(&mut self, cell: Rect, text: &str, style: &TextStyle, align: Align) {
        self.commands.push(DrawCommand::Text {
            page: self.current_page(),
            cell,
            text: text.to_string(),
            style: *style,
            align,
        });
    }
}
