//! Allows to extract text from plain text documents.
use crate::entities::extraction::ExtractedText;
use crate::helpers::StrExt;
use crate::result::ExtractorErr;
use crate::use_cases::extractor::DataExtractor;

/// Decodes UTF-8 text.
///
/// The text is returned as it was written, apart from NUL characters which are dropped.
/// Invalid UTF-8 fails the whole document, there is no lossy fallback.
#[derive(Debug, Default)]
pub struct FromPlainText;

impl DataExtractor for FromPlainText {
    fn extract_data(&self, bytes: &[u8]) -> Result<ExtractedText, ExtractorErr> {
        let text = std::str::from_utf8(bytes)?;
        Ok(ExtractedText::new(text.without_nul()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use anyhow::Result;
    use claims::{assert_matches, assert_none};

    #[test]
    fn test_extract_text() -> Result<()> {
        // given
        let plain = FromPlainText;
        let bytes = "hello world".as_bytes();

        // when
        let result = plain.extract_data(bytes)?;

        // then
        assert_eq!(result.text, "hello world");
        assert_none!(result.page_count);
        assert!(result.skipped.is_empty());

        Ok(())
    }

    #[test]
    fn test_extract_text_from_empty_payload() -> Result<()> {
        // given
        let plain = FromPlainText;

        // when
        let result = plain.extract_data(&[])?;

        // then
        assert_eq!(result.text, "");
        assert_none!(result.page_count);

        Ok(())
    }

    #[test]
    fn test_extract_text_keeps_whitespace_and_unicode() -> Result<()> {
        // given
        let plain = FromPlainText;
        let original = "  Zażółć gęślą jaźń\r\n\ttabbed 🦀 \n";

        // when
        let result = plain.extract_data(original.as_bytes())?;

        // then
        assert_eq!(result.text, original);

        Ok(())
    }

    #[test]
    fn test_extract_text_drops_nul_chars() -> Result<()> {
        // given
        let plain = FromPlainText;

        // when
        let result = plain.extract_data(b"nul\0here")?;

        // then
        assert_eq!(result.text, "nulhere");

        Ok(())
    }

    #[test]
    fn test_extract_text_with_invalid_utf8() {
        // given
        let plain = FromPlainText;
        let bytes = [b'o', b'k', 0xc3, 0x28];

        // when
        let result = plain.extract_data(&bytes);

        // then
        assert_matches!(result, Err(ExtractorErr::Utf8(_)));
    }
}
