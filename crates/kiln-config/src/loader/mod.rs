//! Configuration loading and environment handling

pub mod env;
pub mod file;
pub mod validation;

// Re-export the loaders that other code expects
pub use env::EnvLoader;
pub use file::FileLoader;
pub use validation::*;

use crate::{ConfigResult, KilnConfig};
use std::path::Path;

/// Main configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    pub async fn load_config<P: AsRef<Path>>(&self, path: P) -> ConfigResult<KilnConfig> {
        FileLoader::load(path).await
    }

    /// Load configuration from environment variables only
    pub fn load_from_env(&self) -> ConfigResult<KilnConfig> {
        EnvLoader::load_from_env()
    }

    /// Load with precedence: explicit config file, else the environment
    /// profile. An explicitly passed file that is missing or broken is an
    /// error, never silently replaced.
    pub async fn load_with_overrides<P: AsRef<Path>>(
        &self,
        config_path: Option<P>,
    ) -> ConfigResult<KilnConfig> {
        let config = match config_path {
            Some(path) => FileLoader::load(path).await?,
            None => EnvLoader::load_from_env()?,
        };

        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
