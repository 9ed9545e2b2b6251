use crate::entities::extraction::{ErrorKind, ExtractionFailure};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractorErr {
    #[error("unsupported format: '{0}'")]
    UnsupportedFormat(String),

    #[error("invalid utf-8 sequence: '{0}'")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("failed to parse pdf structure: '{0}'")]
    PdfLoad(#[from] lopdf::Error),

    #[error("pdf is encrypted and can't be read")]
    PdfEncrypted,

    #[error("pdf has no pages")]
    PdfNoPages,

    #[error("pdf decoder failed: '{0}'")]
    PdfDecoder(String),

    #[error("failed to open archive: '{0}'")]
    Archive(#[from] zip::result::ZipError),

    #[error("archive has no '{0}' part")]
    MissingPart(String),

    #[error("archive part '{part}' is larger than {limit} bytes")]
    PartTooLarge { part: String, limit: u64 },

    #[error("failed to read archive entry: '{0}'")]
    Io(#[from] std::io::Error),

    #[error("malformed xml: '{0}'")]
    Xml(#[from] quick_xml::Error),
}

impl ExtractorErr {
    /// Classifies the error for the callers of the extractor.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Self::PdfLoad(_)
            | Self::PdfDecoder(_)
            | Self::Archive(_)
            | Self::MissingPart(_)
            | Self::Io(_) => ErrorKind::CorruptInput,
            Self::Utf8(_)
            | Self::PdfEncrypted
            | Self::PdfNoPages
            | Self::PartTooLarge { .. }
            | Self::Xml(_) => ErrorKind::DecodeError,
        }
    }
}

impl From<ExtractorErr> for ExtractionFailure {
    fn from(err: ExtractorErr) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigurationErr {
    #[error("failed to read or write config file: '{0}'")]
    Io(#[from] std::io::Error),

    #[error("error when deserializing from toml: '{0}'")]
    TomlDe(#[from] toml::de::Error),

    #[error("error when serializing to toml: '{0}'")]
    TomlSer(#[from] toml::ser::Error),

    #[error("invalid config path: '{0}'")]
    InvalidConfigPath(String),

    #[error("failed to read system config directory")]
    MissingConfigDir,
}
