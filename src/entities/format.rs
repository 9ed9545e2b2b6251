//! Represents formats of the documents the extractor understands.
//!
//! Extraction strategy is based on the format. See
//! [`ExtractorFactoryImpl`](crate::data_providers::extractor::ExtractorFactoryImpl).
use crate::helpers::PathRefExt;
use crate::result::ExtractorErr;

use std::fmt::Display;
use std::path::Path;

pub const PLAIN_TEXT_MIME: &str = "text/plain";
pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// Document format.
///
/// Contains all currently supported formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    PlainText,
    Pdf,
    Docx,
}

impl Format {
    pub fn mime(self) -> &'static str {
        match self {
            Self::PlainText => PLAIN_TEXT_MIME,
            Self::Pdf => PDF_MIME,
            Self::Docx => DOCX_MIME,
        }
    }

    /// Guesses the format from a file extension, without the leading dot.
    pub fn from_extension<S: AsRef<str>>(ext: S) -> Option<Self> {
        match ext.as_ref().to_ascii_lowercase().as_str() {
            "txt" | "text" => Some(Self::PlainText),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Format tag for a file, based on its extension. Unknown files get [`UNKNOWN_MIME`].
    pub fn guess_tag<P: AsRef<Path>>(path: P) -> &'static str {
        path.ext()
            .and_then(Self::from_extension)
            .map_or(UNKNOWN_MIME, Self::mime)
    }
}

/// Parses declared format tag.
///
/// Matching is case-insensitive and MIME parameters (everything after `;`) are ignored, so
/// `Text/Plain; charset=utf-8` is still [`Format::PlainText`].
impl TryFrom<&str> for Format {
    type Error = ExtractorErr;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        let essence = tag.split(';').next().unwrap_or_default().trim();
        [Self::PlainText, Self::Pdf, Self::Docx]
            .into_iter()
            .find(|format| format.mime().eq_ignore_ascii_case(essence))
            .ok_or_else(|| ExtractorErr::UnsupportedFormat(tag.to_string()))
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mime())
    }
}
