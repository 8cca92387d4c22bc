//! The PDF base-14 fonts used by cheat sheets.
//!
//! Cheat sheets only ever need a sans-serif face in two weights and a monospaced face for code,
//! so rather than embedding font files the standard Helvetica, Helvetica-Bold, and Courier
//! fonts are referenced by name; every conforming PDF reader supplies them. Text is written in
//! WinAnsi encoding and measured with the standard Adobe width tables below.

use crate::units::*;
use serde::{Deserialize, Serialize};

/// Glyph widths in 1/1000 em for WinAnsi codes 32 (space) through 126 (`~`)
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const COURIER_WIDTH: u16 = 600;

/// One of the standard fonts a sheet can be set in
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    Courier,
}

impl BuiltinFont {
    /// Every font a document may reference; all of them are declared in each page's resources
    pub fn all() -> &'static [BuiltinFont] {
        &[
            BuiltinFont::Helvetica,
            BuiltinFont::HelveticaBold,
            BuiltinFont::Courier,
        ]
    }

    /// The PostScript name PDF readers use to look the font up
    pub fn base_font(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::Courier => "Courier",
        }
    }

    /// The name the font is registered under in page resources
    pub fn resource_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "F1",
            BuiltinFont::HelveticaBold => "F2",
            BuiltinFont::Courier => "F3",
        }
    }

    /// Width of a single WinAnsi-encoded byte in 1/1000 em. Bytes outside of printable ASCII
    /// are accented Latin-1 letters and punctuation, which are close enough to a lowercase
    /// letter's width for truncation purposes.
    fn code_width(&self, code: u8) -> u16 {
        let table = match self {
            BuiltinFont::Helvetica => &HELVETICA_WIDTHS,
            BuiltinFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
            BuiltinFont::Courier => return COURIER_WIDTH,
        };
        match code {
            32..=126 => table[(code - 32) as usize],
            _ => table[(b'n' - 32) as usize],
        }
    }

    /// Calculate the width of a given string of text at the given font size. Characters that
    /// cannot be encoded are measured as the `?` they will be rendered as.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = encode_win_ansi(text)
            .into_iter()
            .map(|code| self.code_width(code) as u32)
            .sum();
        size * (units as f32 / 1000.0)
    }
}

/// Encode text into the single-byte WinAnsi encoding used by the base-14 fonts. Characters
/// without a WinAnsi code point are replaced with `?`, and control characters (tabs
/// included) are dropped.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|ch| !ch.is_control())
        .map(|ch| match ch {
            ' '..='~' => ch as u8,
            '\u{A0}'..='\u{FF}' => ch as u32 as u8,
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2122}' => 0x99,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_measure_helvetica() {
        // H(722) + i(222) = 944 units
        let width = BuiltinFont::Helvetica.width_of_text("Hi", Pt(10.0));
        assert!((width.0 - 9.44).abs() < 1e-4);
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let text = "Request Flow & Edge Layer";
        assert!(
            BuiltinFont::HelveticaBold.width_of_text(text, Pt(8.0))
                > BuiltinFont::Helvetica.width_of_text(text, Pt(8.0))
        );
    }

    #[test]
    fn courier_is_monospaced() {
        let narrow = BuiltinFont::Courier.width_of_text("iiii", Pt(5.5));
        let wide = BuiltinFont::Courier.width_of_text("MMMM", Pt(5.5));
        assert_eq!(narrow, wide);
        assert!((wide.0 - 4.0 * 0.6 * 5.5).abs() < 1e-4);
    }

    #[test]
    fn can_encode_win_ansi() {
        assert_eq!(encode_win_ansi("a\u{2014}b"), vec![b'a', 0x97, b'b']);
        assert_eq!(encode_win_ansi("caf\u{E9}"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("\u{2192}\t"), vec![b'?']);
    }

    #[test]
    fn unencodable_chars_measure_as_question_marks() {
        let arrow = BuiltinFont::Helvetica.width_of_text("\u{2192}", Pt(10.0));
        let question = BuiltinFont::Helvetica.width_of_text("?", Pt(10.0));
        assert_eq!(arrow, question);
    }
}
