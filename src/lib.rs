#![allow(clippy::module_name_repetitions)]

//! Extracts plain text from documents.
//!
//! A [`DocumentPayload`] (raw bytes plus the declared format tag) goes in, an
//! [`ExtractionResult`] comes out. Supported tags are `text/plain`, `application/pdf` and the
//! docx MIME type. Failures are returned as [`ExtractionFailure`] values classified by
//! [`ErrorKind`].
//!
//! ```no_run
//! use doctext::{extract, DocumentPayload};
//!
//! let extracted = extract(DocumentPayload::new("hello world", "text/plain")).unwrap();
//! assert_eq!(extracted.text, "hello world");
//! ```

pub mod configuration;
pub mod data_providers;
pub mod entities;
pub mod report;
pub mod result;
pub mod use_cases;

mod helpers;

pub use entities::extraction::{
    ErrorKind, ExtractedText, ExtractionFailure, ExtractionResult, SkipReason, SkippedPage,
};
pub use entities::format::Format;
pub use entities::payload::DocumentPayload;
pub use use_cases::config::Config;
pub use use_cases::extractor::TextExtractor;

/// Extracts text from `payload` with default configuration.
pub fn extract(payload: DocumentPayload) -> ExtractionResult {
    configuration::factories::text_extractor(&Config::default()).extract(payload)
}
