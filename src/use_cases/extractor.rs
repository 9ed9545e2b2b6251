//! Represents abstractions for extracting text.
use crate::entities::extraction::{ExtractedText, ExtractionResult};
use crate::entities::format::Format;
use crate::entities::payload::DocumentPayload;
use crate::result::ExtractorErr;

use rayon::iter::{IntoParallelIterator, ParallelIterator};

pub type ExtractorCreator = Box<dyn ExtractorFactory>;
pub type Extractor = Box<dyn DataExtractor>;

/// Turns [`DocumentPayload`]s into text.
///
/// Every call is independent: the format tag is parsed, a fresh [`DataExtractor`] is made for
/// it and the payload is dropped when the call returns. Nothing is logged here, reporting is
/// the caller's job.
pub struct TextExtractor {
    extractor_factory: ExtractorCreator,
}

impl TextExtractor {
    pub fn new(extractor_factory: ExtractorCreator) -> Self {
        Self { extractor_factory }
    }

    pub fn extract(&self, payload: DocumentPayload) -> ExtractionResult {
        let format = Format::try_from(payload.format())?;
        let extractor = self.extractor_factory.make(&format);
        Ok(extractor.extract_data(payload.bytes())?)
    }

    /// Extracts all payloads in parallel. Results keep the order of `payloads`.
    pub fn extract_all(&self, payloads: Vec<DocumentPayload>) -> Vec<ExtractionResult> {
        payloads
            .into_par_iter()
            .map(|payload| self.extract(payload))
            .collect()
    }
}

/// Extracts text.
pub trait DataExtractor: Send {
    /// Given raw document bytes, extracts their text.
    fn extract_data(&self, bytes: &[u8]) -> Result<ExtractedText, ExtractorErr>;
}

/// Creates extractor.
pub trait ExtractorFactory: Sync + Send {
    /// Creates different extractors based on the provided format.
    fn make(&self, format: &Format) -> Extractor;
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::entities::extraction::ErrorKind;
    use crate::entities::format::{PDF_MIME, PLAIN_TEXT_MIME};

    use anyhow::Result;
    use claims::assert_ok;
    use std::sync::mpsc::{channel, Receiver, Sender};
    use std::sync::Mutex;
    use std::time::Duration;

    #[test]
    fn extractor_made_for_declared_format_is_used() -> Result<()> {
        // given
        let (spy, factory) = FactorySpy::create();
        let text_extractor = TextExtractor::new(factory);

        // when
        let result = text_extractor.extract(DocumentPayload::new("body", PDF_MIME));

        // then
        assert_ok!(result);
        assert_eq!(spy.requested_format(), Some(Format::Pdf));

        Ok(())
    }

    #[test]
    fn extracted_text_is_returned_on_success() -> Result<()> {
        // given
        let expected = ExtractedText::paged("some text", 1, Vec::new());
        let factory = Box::new(ExtractorFactoryStub::new(ExtractorStub::new(expected.clone())));
        let text_extractor = TextExtractor::new(factory);

        // when
        let result = text_extractor.extract(DocumentPayload::new("body", PDF_MIME))?;

        // then
        assert_eq!(result, expected);

        Ok(())
    }

    #[test]
    fn unsupported_format_fails_without_making_extractor() {
        // given
        let (spy, factory) = FactorySpy::create();
        let text_extractor = TextExtractor::new(factory);

        // when
        let result = text_extractor.extract(DocumentPayload::new("body", "application/msword"));

        // then
        let failure = result.unwrap_err();
        assert_eq!(failure.kind, ErrorKind::UnsupportedFormat);
        assert_eq!(spy.requested_format(), None);
    }

    #[test]
    fn extractor_error_becomes_typed_failure() {
        // given
        let factory = Box::new(ExtractorFactoryStub::new(Box::new(ErroneousExtractor)));
        let text_extractor = TextExtractor::new(factory);

        // when
        let result = text_extractor.extract(DocumentPayload::new("body", PDF_MIME));

        // then
        let failure = result.unwrap_err();
        assert_eq!(failure.kind, ErrorKind::DecodeError);
        assert_eq!(failure.message, "pdf is encrypted and can't be read");
    }

    #[test]
    fn batch_results_keep_input_order() {
        // given
        let text_extractor = TextExtractor::new(Box::new(EchoFactory));
        let payloads = (0..32)
            .map(|i| DocumentPayload::new(format!("doc-{i}"), PLAIN_TEXT_MIME))
            .collect::<Vec<_>>();

        // when
        let results = text_extractor.extract_all(payloads);

        // then
        for (i, result) in results.into_iter().enumerate() {
            assert_eq!(result.unwrap().text, format!("doc-{i}"));
        }
    }

    struct ExtractorFactoryStub {
        extractor_stub: Mutex<Option<Extractor>>,
    }

    impl ExtractorFactoryStub {
        fn new(extractor_stub: Extractor) -> Self {
            Self {
                extractor_stub: Mutex::new(Some(extractor_stub)),
            }
        }
    }

    impl ExtractorFactory for ExtractorFactoryStub {
        fn make(&self, _format: &Format) -> Extractor {
            self.extractor_stub
                .lock()
                .expect("poisoned mutex")
                .take()
                .unwrap()
        }
    }

    struct FactorySpy {
        tx: Mutex<Sender<Format>>,
    }

    impl FactorySpy {
        fn create() -> (Spy, ExtractorCreator) {
            let (tx, rx) = channel();
            (Spy::new(rx), Box::new(Self { tx: Mutex::new(tx) }))
        }
    }

    impl ExtractorFactory for FactorySpy {
        fn make(&self, format: &Format) -> Extractor {
            self.tx
                .lock()
                .expect("poisoned mutex")
                .send(*format)
                .expect("failed to send message");
            ExtractorStub::new(ExtractedText::default())
        }
    }

    struct Spy {
        rx: Receiver<Format>,
    }

    impl Spy {
        fn new(rx: Receiver<Format>) -> Self {
            Self { rx }
        }

        fn requested_format(&self) -> Option<Format> {
            self.rx.recv_timeout(Duration::from_millis(100)).ok()
        }
    }

    struct ExtractorStub {
        text: ExtractedText,
    }

    impl ExtractorStub {
        fn new(text: ExtractedText) -> Extractor {
            Box::new(Self { text })
        }
    }

    impl DataExtractor for ExtractorStub {
        fn extract_data(&self, _bytes: &[u8]) -> Result<ExtractedText, ExtractorErr> {
            Ok(self.text.clone())
        }
    }

    struct ErroneousExtractor;

    impl DataExtractor for ErroneousExtractor {
        fn extract_data(&self, _bytes: &[u8]) -> Result<ExtractedText, ExtractorErr> {
            Err(ExtractorErr::PdfEncrypted)
        }
    }

    struct EchoFactory;

    impl ExtractorFactory for EchoFactory {
        fn make(&self, _format: &Format) -> Extractor {
            Box::new(EchoExtractor)
        }
    }

    struct EchoExtractor;

    impl DataExtractor for EchoExtractor {
        fn extract_data(&self, bytes: &[u8]) -> Result<ExtractedText, ExtractorErr> {
            Ok(ExtractedText::new(std::str::from_utf8(bytes)?))
        }
    }
}
