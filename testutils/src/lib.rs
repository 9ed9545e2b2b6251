#![allow(clippy::missing_errors_doc)]

use anyhow::Result;
use lopdf::content::{Content, Operation};
use lopdf::encryption::{decrypt_object, get_encryption_key};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Single page of the generated PDF.
#[derive(Debug, Clone)]
pub enum TestPage {
    /// Page with a text layer showing the given string.
    Text(String),
    /// Page with painting operators only, no text layer.
    ImageOnly,
}

impl TestPage {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }
}

/// Builds in-memory PDF with one page per entry in `pages`.
pub fn pdf_with_pages(pages: &[TestPage]) -> Result<Vec<u8>> {
    save(document_with_pages(pages, courier())?)
}

/// Same as [`pdf_with_pages`], but the font dictionary has no `/Type` entry.
pub fn pdf_with_untyped_font(pages: &[TestPage]) -> Result<Vec<u8>> {
    let mut font = courier();
    font.remove(b"Type");
    save(document_with_pages(pages, font)?)
}

/// PDF encrypted with the standard security handler (RC4, 40-bit key) under `user_password`.
///
/// An empty `user_password` gives a document protected by the owner password only.
pub fn encrypted_pdf(pages: &[TestPage], user_password: &str) -> Result<Vec<u8>> {
    let mut doc = document_with_pages(pages, courier())?;
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "O" => Object::string_literal(vec![0x5a_u8; 32]),
        "P" => -4,
    });
    doc.trailer.set("Encrypt", encrypt_id);
    doc.trailer.set(
        "ID",
        vec![Object::string_literal(FILE_ID), Object::string_literal(FILE_ID)],
    );

    let key = get_encryption_key(&doc, user_password, false)?;
    doc.get_object_mut(encrypt_id)?
        .as_dict_mut()?
        .set("U", Object::string_literal(rc4(&key, &PASSWORD_PADDING)));
    for (&id, object) in doc.objects.iter_mut() {
        if matches!(object, Object::Stream(_)) {
            // RC4 is symmetric, "decrypting" plain content encrypts it
            let encrypted = decrypt_object(&key, id, &*object)?;
            if let Object::Stream(stream) = object {
                stream.set_content(encrypted);
            }
        }
    }
    save(doc)
}

fn courier() -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    }
}

fn document_with_pages(pages: &[TestPage], font: Dictionary) -> Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(font);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = Content {
            operations: operations(page),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    Ok(doc)
}

fn save(mut doc: Document) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf)?;
    Ok(buf)
}

const FILE_ID: &[u8] = b"doctext-test-file";

const PASSWORD_PADDING: [u8; 32] = [
    0x28, 0xbf, 0x4e, 0x5e, 0x4e, 0x75, 0x8a, 0x41, 0x64, 0x00, 0x4e, 0x56, 0xff, 0xfa, 0x01, 0x08,
    0x2e, 0x2e, 0x00, 0xb6, 0xd0, 0x68, 0x3e, 0x80, 0x2f, 0x0c, 0xa9, 0xfe, 0x64, 0x53, 0x69, 0x7a,
];

fn rc4(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut state: Vec<u8> = (0..=255).collect();
    let mut j = 0_u8;
    for i in 0..256 {
        j = j.wrapping_add(state[i]).wrapping_add(key[i % key.len()]);
        state.swap(i, usize::from(j));
    }
    let (mut i, mut j) = (0_u8, 0_u8);
    data.iter()
        .map(|byte| {
            i = i.wrapping_add(1);
            j = j.wrapping_add(state[usize::from(i)]);
            state.swap(usize::from(i), usize::from(j));
            let idx = state[usize::from(i)].wrapping_add(state[usize::from(j)]);
            byte ^ state[usize::from(idx)]
        })
        .collect()
}

fn operations(page: &TestPage) -> Vec<Operation> {
    match page {
        TestPage::Text(text) => vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![72.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal(text.as_str())]),
            Operation::new("ET", vec![]),
        ],
        TestPage::ImageOnly => vec![
            Operation::new("q", vec![]),
            Operation::new("g", vec![0.into()]),
            Operation::new("re", vec![72.into(), 72.into(), 300.into(), 300.into()]),
            Operation::new("f", vec![]),
            Operation::new("Q", vec![]),
        ],
    }
}

/// Valid PDF cut in half, so the trailer and cross-reference table are gone.
pub fn truncated_pdf() -> Result<Vec<u8>> {
    let mut pdf = pdf_with_pages(&[TestPage::text("this will be cut off")])?;
    pdf.truncate(pdf.len() / 2);
    Ok(pdf)
}

/// Builds in-memory docx with one `w:p` per paragraph.
pub fn docx_with_paragraphs(paragraphs: &[&str]) -> Result<Vec<u8>> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
        .collect();
    docx_with_document_xml(&document_xml(&body))
}

/// Wraps `body` in the `w:document`/`w:body` envelope.
pub fn document_xml(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    )
}

/// Builds in-memory docx whose `word/document.xml` is exactly `xml`.
pub fn docx_with_document_xml(xml: &str) -> Result<Vec<u8>> {
    zip_with_entries(&[
        ("[Content_Types].xml", CONTENT_TYPES),
        ("word/document.xml", xml),
    ])
}

/// Builds in-memory zip archive with given `(name, content)` entries.
pub fn zip_with_entries(entries: &[(&str, &str)]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer.start_file(*name, SimpleFileOptions::default())?;
        writer.write_all(content.as_bytes())?;
    }
    Ok(writer.finish()?.into_inner())
}

const CONTENT_TYPES: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
<Override PartName=\"/word/document.xml\" \
ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>\
</Types>";
