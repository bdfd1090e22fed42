use crate::utils::ConfigFormat;
use crate::{ConfigError, ConfigResult, KilnConfig};
use std::io;
use std::path::Path;
use tokio::fs;

/// File-based configuration loader.
///
/// Format handling lives on [`ConfigFormat`]; this layer only does IO and
/// enforces validate-after-parse so no unchecked configuration escapes.
pub struct FileLoader;

impl FileLoader {
    /// Load project configuration from a file, detecting the format from the
    /// extension. Extensionless files are tried as TOML, then JSON.
    pub async fn load<P: AsRef<Path>>(path: P) -> ConfigResult<KilnConfig> {
        let path = path.as_ref();
        let content = read_config_file(path).await?;

        let config = match ConfigFormat::detect(path)? {
            Some(format) => format.parse(&content)?,
            None => ConfigFormat::Toml
                .parse(&content)
                .or_else(|_| ConfigFormat::Json.parse(&content))?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load project configuration in an explicitly chosen format
    pub async fn load_as<P: AsRef<Path>>(
        format: ConfigFormat,
        path: P,
    ) -> ConfigResult<KilnConfig> {
        let content = read_config_file(path.as_ref()).await?;
        let config = format.parse(&content)?;

        config.validate()?;
        Ok(config)
    }

    /// Save project configuration, picking the format from the extension
    /// (TOML when the extension gives no answer)
    pub async fn save<P: AsRef<Path>>(config: &KilnConfig, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        let format = ConfigFormat::detect(path)?.unwrap_or(ConfigFormat::Toml);
        Self::save_as(format, config, path).await
    }

    /// Save project configuration in an explicitly chosen format
    pub async fn save_as<P: AsRef<Path>>(
        format: ConfigFormat,
        config: &KilnConfig,
        path: P,
    ) -> ConfigResult<()> {
        let content = format.render(config)?;
        fs::write(path, content).await.map_err(ConfigError::Io)?;
        Ok(())
    }
}

/// Read a config file, mapping a missing file onto the dedicated error
async fn read_config_file(path: &Path) -> ConfigResult<String> {
    fs::read_to_string(path).await.map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.display().to_string())
        } else {
            ConfigError::Io(err)
        }
    })
}
