use crate::data_providers::extractor::docx::FromDocx;
use crate::data_providers::extractor::pdf::FromPdf;
use crate::data_providers::extractor::plain::FromPlainText;
use crate::entities::format::Format;
use crate::use_cases::config::Config;
use crate::use_cases::extractor::{Extractor, ExtractorFactory};

pub mod docx;
pub mod pdf;
pub mod plain;

/// Creates specific [`Extractor`] based on the format.
///
/// Each format requires different way of extracting text. For example extracting text from PDF
/// file differs from decoding plain text (see
/// [`FromPdf`](crate::data_providers::extractor::pdf::FromPdf) and
/// [`FromPlainText`](crate::data_providers::extractor::plain::FromPlainText)).
///
/// The format is decided by the tag declared in the payload.
#[derive(Debug)]
pub struct ExtractorFactoryImpl {
    page_separator: String,
    max_part_bytes: u64,
}

impl ExtractorFactoryImpl {
    pub fn new<C: AsRef<Config>>(cfg: C) -> Self {
        let cfg = cfg.as_ref();
        Self {
            page_separator: cfg.page_separator.clone(),
            max_part_bytes: cfg.max_payload_bytes,
        }
    }
}

impl Default for ExtractorFactoryImpl {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ExtractorFactory for ExtractorFactoryImpl {
    fn make(&self, format: &Format) -> Extractor {
        match format {
            Format::PlainText => Box::new(FromPlainText),
            Format::Pdf => Box::new(FromPdf::new(&self.page_separator)),
            Format::Docx => Box::new(FromDocx::new(self.max_part_bytes)),
        }
    }
}
