use crate::result::ConfigurationErr;
use crate::use_cases::config::{CfgLoader, Config, ConfigLoader, ConfigResolver};

use std::fs::create_dir_all;
use std::fs::{read_to_string, File};
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

pub struct FsConfigLoader;

/// Loads configuration file.
///
/// It reads a toml file from the filesystem and decodes it into [`Config`] structure.
impl ConfigLoader for FsConfigLoader {
    #[instrument(skip(self))]
    fn load(&self, path: &Path) -> Result<Config, ConfigurationErr> {
        Ok(toml::from_str(&read_to_string(path)?)?)
    }

    #[instrument(skip(self))]
    fn store(&self, path: &Path, cfg: &Config) -> Result<(), ConfigurationErr> {
        let config_dir = path.parent().ok_or_else(|| {
            ConfigurationErr::InvalidConfigPath("Can't use '/' as a configuration path".into())
        })?;
        create_dir_all(config_dir)?;
        let mut file = File::create(path)?;
        file.write_all(toml::to_string(cfg)?.as_bytes())?;
        Ok(())
    }
}

/// Handles configuration override.
///
/// The priority order is as follows:
/// 1. Config override. It has to exist.
/// 2. Default configuration path. See [`config_path`].
/// 3. Default configuration. It's stored under the default path, so the user has a file to edit.
pub struct FsConfigResolver {
    config_loader: CfgLoader,
}

impl FsConfigResolver {
    pub fn new(config_loader: CfgLoader) -> Self {
        Self { config_loader }
    }
}

impl ConfigResolver for FsConfigResolver {
    #[instrument(skip(self))]
    fn handle_config(&self, path_override: Option<PathBuf>) -> Result<Config, ConfigurationErr> {
        if let Some(path) = path_override {
            debug!("loading config from override '{}'", path.display());
            return self.config_loader.load(&path);
        }
        let config_path = config_path()?;
        if config_path.exists() {
            debug!("loading config from '{}'", config_path.display());
            self.config_loader.load(&config_path)
        } else {
            debug!(
                "config path '{}' doesn't exist, storing defaults",
                config_path.display()
            );
            let cfg = Config::default();
            self.config_loader.store(&config_path, &cfg)?;
            Ok(cfg)
        }
    }
}

pub fn config_path() -> Result<PathBuf, ConfigurationErr> {
    Ok(dirs::config_dir()
        .ok_or(ConfigurationErr::MissingConfigDir)?
        .join("doctext/doctext.toml"))
}
