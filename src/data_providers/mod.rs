pub mod config;
pub mod extractor;
