use crate::data_providers::config::{FsConfigLoader, FsConfigResolver};
use crate::data_providers::extractor::ExtractorFactoryImpl;
use crate::use_cases::config::{CfgLoader, CfgResolver, Config};
use crate::use_cases::extractor::{ExtractorCreator, TextExtractor};

pub fn config_resolver(config_loader: CfgLoader) -> CfgResolver {
    Box::new(FsConfigResolver::new(config_loader))
}

pub fn config_loader() -> CfgLoader {
    Box::new(FsConfigLoader)
}

pub fn extractor_factory(cfg: &Config) -> ExtractorCreator {
    Box::new(ExtractorFactoryImpl::new(cfg))
}

pub fn text_extractor(cfg: &Config) -> TextExtractor {
    TextExtractor::new(extractor_factory(cfg))
}
