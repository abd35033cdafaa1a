//! Minimal text page documents built directly with lopdf.
//!
//! Pages are US Letter with the standard Helvetica faces, so no fonts need
//! to be embedded. Text is written in WinAnsiEncoding.

use crate::ComposerError;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Encoding, Object, Stream, StringFormat};

const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN: f32 = 54.0;
const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 10.0;
const LEADING: f32 = 14.0;

/// One line of page text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub bold: bool,
}

impl TextLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), bold: false }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self { text: text.into(), bold: true }
    }
}

/// A titled page of lines.
#[derive(Debug, Clone, Default)]
pub struct TextPage {
    pub title: String,
    pub lines: Vec<TextLine>,
}

impl TextPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), lines: Vec::new() }
    }

    pub fn line(mut self, line: TextLine) -> Self {
        self.lines.push(line);
        self
    }

    /// How many body lines fit below the title.
    pub fn capacity() -> usize {
        ((PAGE_HEIGHT as f32 - 2.0 * MARGIN - TITLE_SIZE - LEADING) / LEADING) as usize
    }
}

fn font(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

/// Encodes `text` for the page fonts. Characters the encoding lacks become `?`.
fn encode(encoding: &Encoding, text: &str) -> Vec<u8> {
    let mut buf = [0u8; 4];
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let encoded = Document::encode_text(encoding, ch.encode_utf8(&mut buf));
        if encoded.is_empty() {
            bytes.push(b'?');
        } else {
            bytes.extend(encoded);
        }
    }
    bytes
}

fn show_text(ops: &mut Vec<Operation>, font: &str, size: f32, y: f32, text: Vec<u8>) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![MARGIN.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::String(text, StringFormat::Literal)]));
    ops.push(Operation::new("ET", vec![]));
}

/// Builds a document with one page per [`TextPage`], in order.
///
/// A page with more lines than [`TextPage::capacity`] is an error; callers
/// split content across pages themselves.
pub fn text_document(pages: &[TextPage]) -> Result<Document, ComposerError> {
    let capacity = TextPage::capacity();
    if let Some(page) = pages.iter().find(|p| p.lines.len() > capacity) {
        return Err(ComposerError::PageOverflow {
            title: page.title.clone(),
            lines: page.lines.len(),
            capacity,
        });
    }

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let regular = font("Helvetica");
    let encoding = regular.get_font_encoding(&doc)?;
    let regular_id = doc.add_object(regular.clone());
    let bold_id = doc.add_object(font("Helvetica-Bold"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => regular_id, "F2" => bold_id },
    });

    let mut page_ids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let mut ops = Vec::new();
        let mut y = PAGE_HEIGHT as f32 - MARGIN - TITLE_SIZE;
        show_text(&mut ops, "F2", TITLE_SIZE, y, encode(&encoding, &page.title));
        y -= LEADING * 2.0;
        for line in &page.lines {
            let font = if line.bold { "F2" } else { "F1" };
            show_text(&mut ops, font, BODY_SIZE, y, encode(&encoding, &line.text));
            y -= LEADING;
        }

        let content = Content { operations: ops };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        page_ids.push(page_id.into());
    }

    let count = page_ids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_page_per_text_page() {
        let doc = text_document(&[
            TextPage::new("Character").line(TextLine::plain("Level 3 Wizard")),
            TextPage::new("Personality").line(TextLine::heading("Ideals")),
        ])
        .unwrap();
        assert_eq!(doc.get_pages().len(), 2);

        let first = *doc.get_pages().get(&1).unwrap();
        let text = String::from_utf8_lossy(&doc.get_page_content(first).unwrap()).into_owned();
        assert!(text.contains("Level 3 Wizard"));
    }

    fn tj_strings(doc: &Document, page_number: u32) -> Vec<Vec<u8>> {
        let page_id = *doc.get_pages().get(&page_number).unwrap();
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .map(|op| op.operands[0].as_str().unwrap().to_vec())
            .collect()
    }

    #[test]
    fn text_is_win_ansi_encoded() {
        let doc = text_document(&[
            TextPage::new("Zo\u{eb}").line(TextLine::plain("Drizzt\u{2019}s \u{6f22} blade")),
        ])
        .unwrap();

        let strings = tj_strings(&doc, 1);
        assert_eq!(strings[0], b"Zo\xeb".to_vec());
        // Right single quote is 0x92; characters outside the encoding are replaced.
        assert_eq!(strings[1], b"Drizzt\x92s ? blade".to_vec());

        let page_id = *doc.get_pages().get(&1).unwrap();
        let fonts = doc.get_page_fonts(page_id).unwrap();
        for font in fonts.values() {
            assert_eq!(font.get(b"Encoding").unwrap().as_name().unwrap(), b"WinAnsiEncoding");
        }
    }

    #[test]
    fn overfull_page_is_an_error() {
        let mut page = TextPage::new("Backstory");
        for i in 0..=TextPage::capacity() {
            page.lines.push(TextLine::plain(format!("line {i}")));
        }
        let err = text_document(&[page]).unwrap_err();
        assert!(matches!(err, ComposerError::PageOverflow { lines, .. } if lines == TextPage::capacity() + 1));
    }

    #[test]
    fn capacity_leaves_room_for_a_title() {
        let capacity = TextPage::capacity();
        assert!(capacity > 20 && capacity < 60, "capacity was {capacity}");
    }
}
