//! Interface for loading and saving the [`Config`] structure.
//!
//! The actual place where the config will be saved to or read from is not tight to this interface
//! and it's considered to be implementation detail.
use crate::result::ConfigurationErr;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub type CfgResolver = Box<dyn ConfigResolver>;

pub type CfgLoader = Box<dyn ConfigLoader>;

const DEFAULT_PAGE_SEPARATOR: &str = "\n\n";

const DEFAULT_MAX_PAYLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Responsible for reading/saving the configuration from/to some medium.
///
/// Used medium is the implementation detail and is not part of this interface.
pub trait ConfigLoader: Send {
    /// Reads the configuration.
    ///
    /// This reads the configuration pointed by `path`. The `path` argument doesn't need to
    /// represent the location on the File System, this is the implementation detail.
    fn load(&self, path: &Path) -> Result<Config, ConfigurationErr>;

    /// Saves the configuration.
    ///
    /// This saves the configuration in the place pointed by `path`. It doesn't mean that this
    /// should be saved on the disk, the medium is the detail of the implementation.
    fn store(&self, path: &Path, cfg: &Config) -> Result<(), ConfigurationErr>;
}

/// Handles config override.
///
/// When user specifies configuration path during startup, this interface handles this case.
pub trait ConfigResolver: Send {
    /// Loads the [`Config`] using specified path.
    ///
    /// If the path is `None`, then no override takes place and configuration should be loaded from
    /// original path.
    fn handle_config(&self, path_override: Option<PathBuf>) -> Result<Config, ConfigurationErr>;
}

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Put between the texts of consecutive pages.
    pub page_separator: String,
    /// Payloads bigger than this are rejected before extraction starts.
    pub max_payload_bytes: u64,
}

impl Config {
    pub fn admits(&self, payload_len: u64) -> bool {
        payload_len <= self.max_payload_bytes
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_separator: DEFAULT_PAGE_SEPARATOR.into(),
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

impl AsRef<Config> for Config {
    fn as_ref(&self) -> &Config {
        self
    }
}
