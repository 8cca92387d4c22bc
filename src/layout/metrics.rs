use crate::units::*;

/// The vertical rhythm of a sheet: how tall each kind of block is, how much room it needs
/// before it may start, and how far it pushes the cursor. Defaults produce the classic dense
/// three-column reference card set in 5.5-8pt type.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlockMetrics {
    /// Height of the coloured banner across the top of every page
    pub banner_height: Mm,
    pub banner_text_top: Mm,
    pub banner_text_height: Mm,
    /// The footer sits this far below the bottom margin
    pub footer_offset: Mm,
    pub footer_height: Mm,

    /// Left inset of header titles inside their bands
    pub header_indent: Mm,
    pub section_reserve: Mm,
    pub section_band: Mm,
    pub section_advance: Mm,
    /// Room for the sub-header and the first couple of lines of what follows it
    pub subsection_reserve: Mm,
    pub subsection_band: Mm,
    pub subsection_advance: Mm,

    /// Distance between code line baselines
    pub code_line: Mm,
    pub code_cell: Mm,
    /// Extra height of the code background beyond its lines
    pub code_padding: Mm,
    pub code_inset: Mm,
    pub code_gap: Mm,

    pub body_line: Mm,
    pub body_cell: Mm,
    pub body_padding: Mm,
    pub body_inset: Mm,

    pub list_line: Mm,
    pub list_label_cell: Mm,
    /// Space between a list's label and its items
    pub list_label_gap: Mm,
    pub list_padding: Mm,
    pub list_inset: Mm,
    pub list_gap: Mm,

    pub spacer: Mm,
}

impl Default for BlockMetrics {
    fn default() -> Self {
        let code_line = Mm(3.4);
        BlockMetrics {
            banner_height: Mm(14.0),
            banner_text_top: Mm(2.0),
            banner_text_height: Mm(10.0),
            footer_offset: Mm(1.0),
            footer_height: Mm(3.0),

            header_indent: Mm(1.5),
            section_reserve: Mm(7.0),
            section_band: Mm(5.5),
            section_advance: Mm(6.5),
            subsection_reserve: Mm(6.0) + code_line * 2.0 + Mm(2.0),
            subsection_band: Mm(4.5),
            subsection_advance: Mm(5.5),

            code_line,
            code_cell: Mm(3.2),
            code_padding: Mm(2.0),
            code_inset: Mm(1.0),
            code_gap: Mm(0.5),

            body_line: Mm(3.2),
            body_cell: Mm(3.0),
            body_padding: Mm(1.0),
            body_inset: Mm(1.5),

            list_line: Mm(3.2),
            list_label_cell: Mm(3.0),
            list_label_gap: Mm(1.0),
            list_padding: Mm(1.0),
            list_inset: Mm(1.5),
            list_gap: Mm(0.8),

            spacer: Mm(2.0),
        }
    }
}

impl BlockMetrics {
    /// Height a code block of `lines` lines occupies, background included
    pub fn code_height(&self, lines: usize) -> Mm {
        self.code_line * lines as f32 + self.code_padding
    }

    /// Height a body paragraph of `lines` lines occupies
    pub fn body_height(&self, lines: usize) -> Mm {
        self.body_line * lines as f32 + self.body_padding
    }

    /// Height reserved for a labeled list expected to wrap onto `lines` lines
    pub fn list_height(&self, lines: usize) -> Mm {
        self.list_line * lines as f32 + self.list_padding
    }
}
