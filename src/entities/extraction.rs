//! Output of the extraction.
use std::fmt::Display;
use thiserror::Error;

/// Outcome of extracting text from a single [`DocumentPayload`].
///
/// [`DocumentPayload`]: crate::entities::payload::DocumentPayload
pub type ExtractionResult = Result<ExtractedText, ExtractionFailure>;

/// Text extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    /// Number of pages in the source document. Only paged formats have it.
    pub page_count: Option<usize>,
    /// Pages which didn't contribute to `text`, in document order.
    pub skipped: Vec<SkippedPage>,
}

impl ExtractedText {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn paged<S: Into<String>>(text: S, page_count: usize, skipped: Vec<SkippedPage>) -> Self {
        Self {
            text: text.into(),
            page_count: Some(page_count),
            skipped,
        }
    }

    /// True when at least one page was dropped because its text failed to decode.
    ///
    /// Pages without a text layer don't make the result partial, there was nothing to lose.
    pub fn is_partial(&self) -> bool {
        self.skipped
            .iter()
            .any(|page| matches!(page.reason, SkipReason::DecodeFailed(_)))
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPage {
    /// 1-based page number.
    pub page: u32,
    pub reason: SkipReason,
}

impl SkippedPage {
    pub fn new(page: u32, reason: SkipReason) -> Self {
        Self { page, reason }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Page decoded fine but carries no text, e.g. a scanned image.
    NoTextLayer,
    /// Page text couldn't be decoded. Holds the decoder message.
    DecodeFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnsupportedFormat,
    CorruptInput,
    DecodeError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::UnsupportedFormat => "unsupported format",
            Self::CorruptInput => "corrupt input",
            Self::DecodeError => "decode error",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ExtractionFailure {
    pub kind: ErrorKind,
    pub message: String,
}

impl ExtractionFailure {
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
