use crate::canvas::TOTAL_PAGES_ALIAS;
use crate::colour::Colour;
use crate::font::{encode_win_ansi, BuiltinFont};
use crate::pagesize::PageSize;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Str};

/// A single line of text, positioned by its baseline origin in PDF user space
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: BuiltinFont,
    pub size: Pt,
    pub colour: Colour,
    pub coords: (Pt, Pt),
    /// When set, the text is centred in a box this wide whose left edge is at `coords.0`.
    /// Centring waits until the page count is known so that [TOTAL_PAGES_ALIAS] is measured
    /// as the digits that replace it.
    pub centre_in: Option<Pt>,
}

impl SpanLayout {
    /// The text as it will be written and the x-coordinate of its origin
    pub fn resolve(&self, total_pages: usize) -> (String, Pt) {
        let text = self.text.replace(TOTAL_PAGES_ALIAS, &total_pages.to_string());
        let x = match self.centre_in {
            Some(width) => {
                self.coords.0 + (width - self.font.width_of_text(&text, self.size)) / 2.0
            }
            None => self.coords.0,
        };
        (text, x)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    /// A solid rectangle, in PDF user space
    Fill { rect: Rect, colour: Colour },
    Text(SpanLayout),
}

/// A page of the output document. Contents are painted in the order they were added, so later
/// contents cover earlier ones.
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize) -> Page {
        let (width, height) = size;
        let width: Pt = width.into();
        let height: Pt = height.into();
        Page {
            media_box: Rect {
                x1: 0.0,
                y1: 0.0,
                x2: *width,
                y2: *height,
            },
            contents: Vec::default(),
        }
    }

    pub fn add_fill(&mut self, rect: Rect, colour: Colour) {
        self.contents.push(PageContents::Fill { rect, colour });
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(span));
    }

    /// Render the page contents into an uncompressed content stream. Any
    /// [TOTAL_PAGES_ALIAS] in text is replaced with `total_pages`.
    pub(crate) fn render(&self, total_pages: usize) -> Vec<u8> {
        let mut content = Content::new();

        for item in self.contents.iter() {
            match item {
                PageContents::Fill { rect, colour } => {
                    content.save_state();
                    set_fill(&mut content, *colour);
                    content.rect(rect.x1, rect.y1, rect.x2 - rect.x1, rect.y2 - rect.y1);
                    content.fill_nonzero();
                    content.restore_state();
                }
                PageContents::Text(span) => {
                    let (text, x) = span.resolve(total_pages);
                    content.begin_text();
                    set_fill(&mut content, span.colour);
                    content.set_font(Name(span.font.resource_name().as_bytes()), *span.size);
                    content.next_line(*x, *span.coords.1);
                    content.show(Str(&encode_win_ansi(&text)));
                    content.end_text();
                }
            }
        }

        content.finish()
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        total_pages: usize,
        writer: &mut Pdf,
    ) {
        let id = refs.gen(RefType::Page(page_index));
        let parent = refs.gen(RefType::PageTree);
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box);
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for font in BuiltinFont::all() {
            resource_fonts.pair(
                Name(font.resource_name().as_bytes()),
                refs.gen(RefType::Font(*font)),
            );
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            &self.render(total_pages),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, &compressed)
            .filter(Filter::FlateDecode);
    }
}

fn set_fill(content: &mut Content, colour: Colour) {
    match colour {
        Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
        Colour::Grey { g } => content.set_fill_gray(g),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_numbers_are_resolved_when_rendering() {
        let mut page = Page::new(crate::pagesize::A4);
        page.add_span(SpanLayout {
            text: format!("Page 1/{TOTAL_PAGES_ALIAS}"),
            font: BuiltinFont::Helvetica,
            size: Pt(5.0),
            colour: Colour::new_grey(0.5),
            coords: (Pt(10.0), Pt(10.0)),
            centre_in: None,
        });

        let rendered = String::from_utf8_lossy(&page.render(7)).to_string();
        assert!(rendered.contains("(Page 1/7) Tj"));
        assert!(rendered.contains("/F1 5 Tf"));
    }

    #[test]
    fn centred_page_numbers_are_measured_with_their_digits() {
        let span = SpanLayout {
            text: format!("Page 1/{TOTAL_PAGES_ALIAS}"),
            font: BuiltinFont::Helvetica,
            size: Pt(5.0),
            colour: Colour::new_grey(0.5),
            coords: (Pt(100.0), Pt(10.0)),
            centre_in: Some(Pt(200.0)),
        };

        let (text, x) = span.resolve(123);
        assert_eq!(text, "Page 1/123");
        let width = BuiltinFont::Helvetica.width_of_text("Page 1/123", Pt(5.0));
        assert!((x.0 - (100.0 + (200.0 - width.0) / 2.0)).abs() < 1e-3);

        // the text is centred: equal space on either side
        let left = x.0 - 100.0;
        let right = 300.0 - (x.0 + width.0);
        assert!((left - right).abs() < 1e-3);

        let placeholder = BuiltinFont::Helvetica.width_of_text("Page 1/{nb}", Pt(5.0));
        assert!((placeholder.0 - width.0).abs() > 1e-3);
    }

    #[test]
    fn left_aligned_spans_keep_their_origin() {
        let span = SpanLayout {
            text: "fn main()".to_string(),
            font: BuiltinFont::Courier,
            size: Pt(5.5),
            colour: Colour::new_grey(0.0),
            coords: (Pt(42.0), Pt(10.0)),
            centre_in: None,
        };
        assert_eq!(span.resolve(3), ("fn main()".to_string(), Pt(42.0)));
    }

    #[test]
    fn fills_are_painted_in_order() {
        let mut page = Page::new(crate::pagesize::A4);
        page.add_fill(
            Rect {
                x1: 0.0,
                y1: 0.0,
                x2: 10.0,
                y2: 10.0,
            },
            Colour::new_rgb(1.0, 0.0, 0.0),
        );
        page.add_fill(
            Rect {
                x1: 0.0,
                y1: 0.0,
                x2: 10.0,
                y2: 10.0,
            },
            Colour::new_grey(1.0),
        );

        let rendered = String::from_utf8_lossy(&page.render(1)).to_string();
        let red = rendered.find("1 0 0 rg").expect("red fill is rendered");
        let white = rendered.find("1 g").expect("white fill is rendered");
        assert!(red < white);
    }
}
