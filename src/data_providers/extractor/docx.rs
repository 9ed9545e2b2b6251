//! Allows to extract text from Word (docx) documents.
use crate::entities::extraction::ExtractedText;
use crate::helpers::StrExt;
use crate::result::ExtractorErr;
use crate::use_cases::config::Config;
use crate::use_cases::extractor::DataExtractor;

use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::result::ZipError;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts text from docx file.
///
/// Only the main document part is read. Every paragraph ends with a newline, `w:tab` becomes a
/// tab and `w:br`/`w:cr` become newlines. Headers, footers and comments are ignored.
///
/// The document part is decompressed up to `max_part_bytes`, larger parts are rejected.
#[derive(Debug)]
pub struct FromDocx {
    max_part_bytes: u64,
}

impl FromDocx {
    pub fn new(max_part_bytes: u64) -> Self {
        Self { max_part_bytes }
    }

    fn document_part(&self, bytes: &[u8]) -> Result<String, ExtractorErr> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let part = archive.by_name(DOCUMENT_PART).map_err(|e| match e {
            ZipError::FileNotFound => ExtractorErr::MissingPart(DOCUMENT_PART.into()),
            e => ExtractorErr::Archive(e),
        })?;
        let too_large = || ExtractorErr::PartTooLarge {
            part: DOCUMENT_PART.into(),
            limit: self.max_part_bytes,
        };
        if part.size() > self.max_part_bytes {
            return Err(too_large());
        }
        // declared size can lie, the limit is enforced on the decompressed stream as well
        let mut buf = Vec::new();
        part.take(self.max_part_bytes.saturating_add(1))
            .read_to_end(&mut buf)?;
        if buf.len() as u64 > self.max_part_bytes {
            return Err(too_large());
        }
        Ok(std::str::from_utf8(&buf)?.to_string())
    }
}

impl Default for FromDocx {
    fn default() -> Self {
        Self::new(Config::default().max_payload_bytes)
    }
}

impl DataExtractor for FromDocx {
    fn extract_data(&self, bytes: &[u8]) -> Result<ExtractedText, ExtractorErr> {
        let xml = self.document_part(bytes)?;
        let text = paragraphs(&xml)?;
        Ok(ExtractedText::new(text.without_nul().trim()))
    }
}

fn paragraphs(xml: &str) -> Result<String, ExtractorErr> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" | b"w:br" | b"w:cr" => text.push('\n'),
                b"w:tab" => text.push('\t'),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                text.push_str(&t.unescape().map_err(quick_xml::Error::from)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(text)
}

#[cfg(test)]
mod test {
    use super::*;

    use anyhow::Result;
    use claims::{assert_matches, assert_none};
    use testutils::{
        docx_with_document_xml, docx_with_paragraphs, document_xml, zip_with_entries,
    };

    #[test]
    fn test_extract_text() -> Result<()> {
        // given
        let docx = FromDocx::default();
        let bytes = docx_with_paragraphs(&["First paragraph", "Second paragraph"])?;

        // when
        let result = docx.extract_data(&bytes)?;

        // then
        assert_eq!(result.text, "First paragraph\nSecond paragraph");
        assert_none!(result.page_count);

        Ok(())
    }

    #[test]
    fn test_extract_text_with_tabs_breaks_and_entities() -> Result<()> {
        // given
        let docx = FromDocx::default();
        let xml = document_xml(
            "<w:p><w:r><w:t>Fish &amp; chips</w:t><w:tab/><w:t>£4</w:t></w:r></w:p>\
             <w:p/>\
             <w:p><w:r><w:t>line</w:t><w:br/><w:t>break</w:t></w:r></w:p>",
        );
        let bytes = docx_with_document_xml(&xml)?;

        // when
        let result = docx.extract_data(&bytes)?;

        // then
        assert_eq!(result.text, "Fish & chips\t£4\n\nline\nbreak");

        Ok(())
    }

    #[test]
    fn test_extract_text_ignores_text_outside_runs() -> Result<()> {
        // given
        let docx = FromDocx::default();
        let xml = document_xml(
            "<w:p><w:pPr><w:pStyle w:val=\"Title\"/></w:pPr>\
             <w:r><w:instrText>PAGE</w:instrText><w:t>visible</w:t></w:r></w:p>",
        );
        let bytes = docx_with_document_xml(&xml)?;

        // when
        let result = docx.extract_data(&bytes)?;

        // then
        assert_eq!(result.text, "visible");

        Ok(())
    }

    #[test]
    fn test_extract_text_from_archive_without_document_part() -> Result<()> {
        // given
        let docx = FromDocx::default();
        let bytes = zip_with_entries(&[("word/styles.xml", "<w:styles/>")])?;

        // when
        let result = docx.extract_data(&bytes);

        // then
        assert_matches!(result, Err(ExtractorErr::MissingPart(_)));

        Ok(())
    }

    #[test]
    fn test_extract_text_from_non_archive() {
        // given
        let docx = FromDocx::default();

        // when
        let result = docx.extract_data(b"plain text pretending to be docx");

        // then
        assert_matches!(result, Err(ExtractorErr::Archive(_)));
    }

    #[test]
    fn test_extract_text_from_malformed_xml() -> Result<()> {
        // given
        let docx = FromDocx::default();
        let bytes = docx_with_document_xml("<w:document><w:body><w:p></w:body>")?;

        // when
        let result = docx.extract_data(&bytes);

        // then
        assert_matches!(result, Err(ExtractorErr::Xml(_)));

        Ok(())
    }

    #[test]
    fn test_extract_text_rejects_document_part_above_limit() -> Result<()> {
        // given
        let docx = FromDocx::new(64);
        let paragraph = "a".repeat(1024);
        let bytes = docx_with_paragraphs(&[paragraph.as_str()])?;

        // when
        let result = docx.extract_data(&bytes);

        // then
        assert_matches!(result, Err(ExtractorErr::PartTooLarge { limit: 64, .. }));

        Ok(())
    }

    #[test]
    fn test_extract_text_accepts_document_part_at_limit() -> Result<()> {
        // given
        let xml = document_xml("<w:p><w:r><w:t>fits</w:t></w:r></w:p>");
        let docx = FromDocx::new(xml.len() as u64);
        let bytes = docx_with_document_xml(&xml)?;

        // when
        let result = docx.extract_data(&bytes)?;

        // then
        assert_eq!(result.text, "fits");

        Ok(())
    }
}
