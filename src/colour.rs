use serde::{Deserialize, Serialize};

/// A fill colour, expressed in RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }
}

impl From<Rgb> for Colour {
    fn from(rgb: Rgb) -> Self {
        let Rgb([r, g, b]) = rgb;
        Colour::new_rgb_bytes(r, g, b)
    }
}

/// An RGB byte triple as it appears in configuration files, i.e. `[30, 60, 110]`
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

/// The colour scheme of a cheat sheet. Every fill and text colour the layout engine uses is
/// looked up from here, so a sheet can be restyled entirely from configuration.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Title banner across the top of every page
    pub banner: Rgb,
    /// Section header bands
    pub section: Rgb,
    /// Sub-header bands
    pub subsection: Rgb,
    /// Code block backgrounds
    pub code: Rgb,
    /// The page itself; also used to erase content that has to move
    pub background: Rgb,
    /// Text drawn on the dark banner and section bands
    pub light_text: Rgb,
    /// Labels and sub-header text
    pub dark_text: Rgb,
    /// Body and code text
    pub muted_text: Rgb,
    /// Page numbers
    pub footer_text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            banner: Rgb([30, 60, 110]),
            section: Rgb([55, 90, 145]),
            subsection: Rgb([200, 215, 235]),
            code: Rgb([245, 245, 245]),
            background: Rgb([255, 255, 255]),
            light_text: Rgb([255, 255, 255]),
            dark_text: Rgb([30, 30, 30]),
            muted_text: Rgb([60, 60, 60]),
            footer_text: Rgb([150, 150, 150]),
        }
    }
}
