use crate::{
    font::BuiltinFont,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    QuickRefError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the pages of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// The number of pages that will be written
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Render the entire document and write it to `w`. The PDF is assembled in memory and
    /// written in one go at the end.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), QuickRefError> {
        let Document {
            info,
            pages,
            page_order,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();
        let total_pages = page_refs.len();

        writer
            .pages(page_tree_id)
            .count(total_pages as i32)
            .kids(page_refs);

        for font in BuiltinFont::all() {
            let id = refs.gen(RefType::Font(*font));
            writer
                .type1_font(id)
                .base_font(Name(font.base_font().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for (page_index, id) in page_order.iter().enumerate() {
            pages[*id].write(&mut refs, page_index, total_pages, &mut writer);
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}
