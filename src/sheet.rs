use crate::canvas::Canvas;
use crate::info::Info;
use crate::layout::text::split_lines;
use crate::layout::LayoutEngine;
use crate::units::*;
use crate::QuickRefError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The content of a reference sheet: metadata and the blocks to lay out, page by page
///
/// ```
/// use pdf_quickref::sheet::{Block, Sheet};
///
/// let sheet = Sheet::from_toml(r#"
/// title = "Rust Cheat Sheet"
///
/// [[pages]]
/// title = "Ownership"
///
/// [[pages.blocks]]
/// kind = "section"
/// title = "Borrowing"
///
/// [[pages.blocks]]
/// kind = "code"
/// text = """
/// let s = String::from("hi");
/// let r = &s;
/// """
/// "#).expect("valid sheet");
///
/// assert_eq!(sheet.pages[0].blocks.len(), 2);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Sheet {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub pages: Vec<SheetPage>,
}

/// Everything on a page and whatever it overflows onto
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SheetPage {
    /// Shown in the banner; pages that content overflows onto are marked as continued
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    Section {
        title: String,
    },
    Subsection {
        title: String,
    },
    /// One code line per line of `text`
    Code {
        text: String,
    },
    /// One paragraph line per line of `text`; long lines are cut short, not wrapped
    Body {
        text: String,
    },
    List {
        label: String,
        items: Vec<String>,
    },
    Spacer {
        #[serde(default)]
        height: Option<Mm>,
    },
}

impl Sheet {
    pub fn from_toml(contents: &str) -> Result<Sheet, QuickRefError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Sheet, QuickRefError> {
        let contents = std::fs::read_to_string(path)?;
        Sheet::from_toml(&contents)
    }

    /// The document metadata to embed in the PDF
    pub fn info(&self) -> Info {
        let mut info = Info::titled(&self.title);
        if let Some(author) = &self.author {
            info = info.author(author);
        }
        if let Some(subject) = &self.subject {
            info = info.subject(subject);
        }
        for keyword in self.keywords.iter() {
            info = info.keyword(keyword);
        }
        info
    }

    /// Lay out every page of the sheet. The first page begins the document; each following
    /// page starts fresh even if there is room left on the previous one.
    pub fn render<C: Canvas>(&self, engine: &mut LayoutEngine<C>) {
        for (i, page) in self.pages.iter().enumerate() {
            if i == 0 {
                engine.begin_document(&page.title);
            } else {
                engine.force_new_page(&page.title);
            }
            tracing::debug!(title = %page.title, blocks = page.blocks.len(), "rendering page");

            for block in page.blocks.iter() {
                block.place(engine);
            }
        }
    }
}

impl Block {
    fn place<C: Canvas>(&self, engine: &mut LayoutEngine<C>) {
        match self {
            Block::Section { title } => {
                engine.place_section_header(title);
            }
            Block::Subsection { title } => {
                engine.place_sub_header(title);
            }
            Block::Code { text } => {
                engine.place_code_block(&split_lines(text));
            }
            Block::Body { text } => {
                engine.place_body_text(&split_lines(text));
            }
            Block::List { label, items } => {
                engine.place_labeled_list(label, items);
            }
            Block::Spacer { height } => {
                engine.place_spacer(*height);
            }
        }
    }
}
