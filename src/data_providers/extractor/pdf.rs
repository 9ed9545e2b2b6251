//! Allows to extract text from PDF.
use crate::entities::extraction::{ExtractedText, SkipReason, SkippedPage};
use crate::helpers::{catch_quietly, StrExt};
use crate::result::ExtractorErr;
use crate::use_cases::config::Config;
use crate::use_cases::extractor::DataExtractor;

use lopdf::Document;
use std::panic::AssertUnwindSafe;

/// Extracts text from PDF file.
///
/// It parses the document with [`lopdf`] and extracts text page by page, in document order.
/// Pages are joined with `page_separator`.
///
/// Encrypted documents are decrypted with the empty user password, which opens documents
/// protected by an owner password only.
///
/// A page which can't be decoded by [`lopdf`] is retried with [`pdf_extract`] over the same
/// buffer. Panics of either decoder are caught and count as decode failures. The document is decoded by the fallback at most once, and only when needed. Pages
/// without any text, or still failing after the fallback, are skipped and reported in
/// [`ExtractedText::skipped`].
#[derive(Debug)]
pub struct FromPdf {
    page_separator: String,
}

impl FromPdf {
    pub fn new<S: Into<String>>(page_separator: S) -> Self {
        Self {
            page_separator: page_separator.into(),
        }
    }
}

impl Default for FromPdf {
    fn default() -> Self {
        Self::new(Config::default().page_separator)
    }
}

impl DataExtractor for FromPdf {
    fn extract_data(&self, bytes: &[u8]) -> Result<ExtractedText, ExtractorErr> {
        let doc = load(bytes)?;
        let page_numbers = doc.get_pages().into_keys().collect::<Vec<u32>>();
        if page_numbers.is_empty() {
            return Err(ExtractorErr::PdfNoPages);
        }
        let mut fallback = Fallback::new(bytes);
        Ok(collect_pages(&page_numbers, &self.page_separator, |number| {
            page_text(&doc, number).or_else(|err| fallback.page(number).ok_or(err))
        }))
    }
}

fn load(bytes: &[u8]) -> Result<Document, ExtractorErr> {
    catch_quietly(|| load_and_decrypt(bytes)).map_err(ExtractorErr::PdfDecoder)?
}

fn load_and_decrypt(bytes: &[u8]) -> Result<Document, ExtractorErr> {
    let mut doc = Document::load_mem(bytes).map_err(|e| {
        if mentions_encryption(&e.to_string()) {
            ExtractorErr::PdfEncrypted
        } else {
            ExtractorErr::PdfLoad(e)
        }
    })?;
    if doc.is_encrypted() {
        doc.decrypt("").map_err(|_| ExtractorErr::PdfEncrypted)?;
    }
    Ok(doc)
}

fn page_text(doc: &Document, number: u32) -> Result<String, String> {
    // lopdf only reads the document here
    let doc = AssertUnwindSafe(doc);
    catch_quietly(move || doc.extract_text(&[number]))?.map_err(|e| e.to_string())
}

// lopdf reports failed decryption through several error variants, the message is the common part
fn mentions_encryption(msg: &str) -> bool {
    let msg = msg.to_ascii_lowercase();
    ["encrypt", "decrypt", "password"]
        .iter()
        .any(|word| msg.contains(word))
}

/// Decodes every page with `decode` and joins the non-empty ones.
fn collect_pages<F>(page_numbers: &[u32], separator: &str, mut decode: F) -> ExtractedText
where
    F: FnMut(u32) -> Result<String, String>,
{
    let mut texts = Vec::with_capacity(page_numbers.len());
    let mut skipped = Vec::new();
    for &number in page_numbers {
        match decode(number) {
            Ok(text) => {
                let text = text.without_nul();
                let text = text.trim();
                if text.is_empty() {
                    skipped.push(SkippedPage::new(number, SkipReason::NoTextLayer));
                } else {
                    texts.push(text.to_string());
                }
            }
            Err(msg) => skipped.push(SkippedPage::new(number, SkipReason::DecodeFailed(msg))),
        }
    }
    ExtractedText::paged(texts.join(separator), page_numbers.len(), skipped)
}

struct Fallback<'a> {
    bytes: &'a [u8],
    pages: Option<Option<Vec<String>>>,
}

impl<'a> Fallback<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pages: None }
    }

    fn page(&mut self, number: u32) -> Option<String> {
        let bytes = self.bytes;
        let pages = self.pages.get_or_insert_with(|| decode_by_pages(bytes));
        let idx = usize::try_from(number).ok()?.checked_sub(1)?;
        pages.as_ref()?.get(idx).cloned()
    }
}

// NOTE: pdf_extract panics on some malformed fonts, it must not cross the extractor boundary
fn decode_by_pages(bytes: &[u8]) -> Option<Vec<String>> {
    catch_quietly(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .ok()?
        .ok()
}
