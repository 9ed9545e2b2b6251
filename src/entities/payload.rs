//! Input of the extraction.

/// Raw document bytes together with the format the caller declared for them.
///
/// The declared tag is kept verbatim. It's parsed only when the payload reaches
/// [`TextExtractor`](crate::use_cases::extractor::TextExtractor), so an unsupported tag is
/// reported as a regular extraction failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPayload {
    bytes: Vec<u8>,
    format: String,
}

impl DocumentPayload {
    pub fn new<B: Into<Vec<u8>>, S: Into<String>>(bytes: B, format: S) -> Self {
        Self {
            bytes: bytes.into(),
            format: format.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
