use crate::colour::Palette;
use crate::layout::{BlockMetrics, CodeTruncation, ColumnGrid, LayoutOptions};
use crate::pagesize::{PageOrientation, PageSize, Paper};
use crate::style::Theme;
use crate::units::*;
use crate::QuickRefError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How a sheet is laid out and coloured, usually read from a TOML file. Every field has a
/// default, so an empty file gives the standard three column landscape letter sheet.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub paper: Paper,
    pub landscape: bool,
    /// Left, right, and bottom page margin
    pub margin: Mm,
    pub columns: usize,
    pub column_gap: Mm,
    /// Where the columns start, measured from the top of the page
    pub content_top: Mm,
    pub banner_height: Mm,
    pub orphan_correction: bool,
    pub code_truncation: CodeTruncation,
    pub footer: bool,
    /// Where to write the PDF when no output path is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outfile: Option<PathBuf>,
    pub palette: Palette,
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            paper: Paper::default(),
            landscape: true,
            margin: Mm(6.0),
            columns: 3,
            column_gap: Mm(4.0),
            content_top: Mm(18.0),
            banner_height: BlockMetrics::default().banner_height,
            orphan_correction: true,
            code_truncation: CodeTruncation::default(),
            footer: true,
            outfile: None,
            palette: Palette::default(),
        }
    }
}

impl SheetConfig {
    pub fn from_toml(contents: &str) -> Result<SheetConfig, QuickRefError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<SheetConfig, QuickRefError> {
        let contents = std::fs::read_to_string(path)?;
        SheetConfig::from_toml(&contents)
    }

    /// The size of every page, oriented as configured
    pub fn page_size(&self) -> PageSize {
        let size = self.paper.size();
        if self.landscape {
            size.landscape()
        } else {
            size.portrait()
        }
    }

    pub fn grid(&self) -> Result<ColumnGrid, QuickRefError> {
        if self.banner_height > self.content_top {
            return Err(QuickRefError::InvalidGeometry {
                reason: format!(
                    "the {} banner overlaps content starting at {}",
                    self.banner_height, self.content_top
                ),
            });
        }
        ColumnGrid::new(
            self.page_size(),
            self.margin,
            self.columns,
            self.column_gap,
            self.content_top,
        )
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            orphan_correction: self.orphan_correction,
            code_truncation: self.code_truncation,
            footer: self.footer,
            theme: Theme::from(&self.palette),
            metrics: BlockMetrics {
                banner_height: self.banner_height,
                ..BlockMetrics::default()
            },
        }
    }

    /// Check that the configured geometry leaves room for content
    pub fn validate(&self) -> Result<(), QuickRefError> {
        self.grid().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Rgb;
    use crate::pagesize::LETTER;

    #[test]
    fn empty_config_is_the_default() {
        let config = SheetConfig::from_toml("").expect("can parse empty config");
        assert_eq!(config, SheetConfig::default());
        assert_eq!(config.page_size(), LETTER.landscape());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn can_parse_partial_config() {
        let config = SheetConfig::from_toml(
            r#"
paper = "a4"
landscape = false
columns = 2
margin = 10
code_truncation = "measured"

[palette]
banner = [0, 0, 0]
"#,
        )
        .expect("can parse config");

        assert_eq!(config.paper, Paper::A4);
        assert_eq!(config.columns, 2);
        assert_eq!(config.margin, Mm(10.0));
        assert_eq!(config.column_gap, Mm(4.0));
        assert_eq!(config.code_truncation, CodeTruncation::Measured);
        assert_eq!(config.palette.banner, Rgb([0, 0, 0]));
        assert_eq!(config.palette.code, Palette::default().code);

        let grid = config.grid().expect("valid geometry");
        assert_eq!(grid.page_width(), Mm(210.0));
        assert_eq!(grid.columns(), 2);
    }

    #[test]
    fn can_round_trip_default_config() {
        let written = toml::to_string(&SheetConfig::default()).expect("can serialize config");
        assert!(written.contains("columns = 3"));
        let read = SheetConfig::from_toml(&written).expect("can parse written config");
        assert_eq!(read, SheetConfig::default());
    }

    #[test]
    fn reports_impossible_geometry() {
        let config = SheetConfig {
            columns: 40,
            ..SheetConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(QuickRefError::InvalidGeometry { .. })
        ));

        let config = SheetConfig {
            banner_height: Mm(30.0),
            ..SheetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_paper_is_rejected() {
        assert!(matches!(
            SheetConfig::from_toml("paper = \"folio\""),
            Err(QuickRefError::Toml(_))
        ));
    }

    #[test]
    fn options_follow_the_config() {
        let config = SheetConfig {
            orphan_correction: false,
            footer: false,
            banner_height: Mm(12.0),
            ..SheetConfig::default()
        };
        let options = config.layout_options();
        assert!(!options.orphan_correction);
        assert!(!options.footer);
        assert_eq!(options.metrics.banner_height, Mm(12.0));
    }
}
