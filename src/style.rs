use crate::colour::{Colour, Palette};
use crate::font::BuiltinFont;
use crate::units::*;

/// Everything needed to draw a run of text. Styles are handed to the canvas together with the
/// text on every draw call, so nothing about one block's font or colour can leak into the next.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TextStyle {
    pub font: BuiltinFont,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    pub fn new(font: BuiltinFont, size: Pt, colour: Colour) -> TextStyle {
        TextStyle { font, size, colour }
    }

    /// The width of `text` when set in this style
    pub fn width_of(&self, text: &str) -> Mm {
        self.font.width_of_text(text, self.size).into()
    }
}

/// Horizontal placement of text within its cell
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Align {
    #[default]
    Left,
    Centre,
}

/// The fills and text styles of every kind of block on a sheet, derived from a [Palette]
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Theme {
    pub banner_fill: Colour,
    pub section_fill: Colour,
    pub subsection_fill: Colour,
    pub code_fill: Colour,
    pub background: Colour,
    pub banner_text: TextStyle,
    pub section_text: TextStyle,
    pub subsection_text: TextStyle,
    pub code_text: TextStyle,
    pub body_text: TextStyle,
    pub list_label: TextStyle,
    pub list_items: TextStyle,
    pub footer_text: TextStyle,
}

impl From<&Palette> for Theme {
    fn from(palette: &Palette) -> Self {
        let light: Colour = palette.light_text.into();
        let dark: Colour = palette.dark_text.into();
        let muted: Colour = palette.muted_text.into();

        Theme {
            banner_fill: palette.banner.into(),
            section_fill: palette.section.into(),
            subsection_fill: palette.subsection.into(),
            code_fill: palette.code.into(),
            background: palette.background.into(),
            banner_text: TextStyle::new(BuiltinFont::HelveticaBold, Pt(14.0), light),
            section_text: TextStyle::new(BuiltinFont::HelveticaBold, Pt(8.0), light),
            subsection_text: TextStyle::new(BuiltinFont::HelveticaBold, Pt(6.5), dark),
            code_text: TextStyle::new(BuiltinFont::Courier, Pt(5.5), muted),
            body_text: TextStyle::new(BuiltinFont::Helvetica, Pt(6.0), muted),
            list_label: TextStyle::new(BuiltinFont::HelveticaBold, Pt(6.0), dark),
            list_items: TextStyle::new(BuiltinFont::Courier, Pt(5.5), muted),
            footer_text: TextStyle::new(
                BuiltinFont::Helvetica,
                Pt(5.0),
                palette.footer_text.into(),
            ),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from(&Palette::default())
    }
}
