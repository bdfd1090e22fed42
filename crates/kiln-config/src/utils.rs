use crate::loader::{EnvLoader, FileLoader};
use crate::{ConfigError, ConfigResult, KilnConfig};
use std::path::{Path, PathBuf};

/// Default project configuration filename
pub const DEFAULT_CONFIG_FILE: &str = "kiln.toml";

/// Configuration utility functions
pub struct ConfigUtils;

impl ConfigUtils {
    /// Find a configuration file in standard locations
    pub fn find_config_file(filename: &str) -> ConfigResult<PathBuf> {
        let search_paths = vec![
            // Current directory
            PathBuf::from("."),
            // Config subdirectory
            PathBuf::from("config"),
            // User config directory
            dirs::config_dir()
                .map(|d| d.join("kiln"))
                .unwrap_or_else(|| PathBuf::from(".kiln")),
            // System config directory
            PathBuf::from("/etc/kiln"),
        ];

        for search_path in search_paths.into_iter() {
            let config_path = search_path.join(filename);
            if config_path.exists() && config_path.is_file() {
                return Ok(config_path);
            }

            // Also try with common extensions
            for ext in &["toml", "json"] {
                let config_with_ext = search_path.join(format!("{}.{}", filename, ext));
                if config_with_ext.exists() && config_with_ext.is_file() {
                    return Ok(config_with_ext);
                }
            }
        }

        Err(ConfigError::FileNotFound(format!(
            "Configuration file '{}' not found in standard locations",
            filename
        )))
    }

    /// Create a configuration directory if it doesn't exist
    pub fn ensure_config_directory<P: AsRef<Path>>(path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        if !path.exists() {
            std::fs::create_dir_all(path).map_err(ConfigError::Io)?;
        } else if !path.is_dir() {
            return Err(ConfigError::ValidationFailed(format!(
                "Path exists but is not a directory: {}",
                path.display()
            )));
        }
        Ok(())
    }

    /// Get configuration file extension
    pub fn get_file_extension<P: AsRef<Path>>(path: P) -> Option<String> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase())
    }

    /// Validate configuration file syntax without loading
    pub fn validate_syntax<P: AsRef<Path>>(path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match ConfigFormat::detect(path)? {
            Some(ConfigFormat::Toml) => {
                toml::from_str::<toml::Value>(&content).map_err(ConfigError::Toml)?;
            }
            Some(ConfigFormat::Json) => {
                serde_json::from_str::<serde_json::Value>(&content).map_err(ConfigError::Json)?;
            }
            None => {
                // Try both formats
                if toml::from_str::<toml::Value>(&content).is_err()
                    && serde_json::from_str::<serde_json::Value>(&content).is_err()
                {
                    return Err(ConfigError::InvalidFormat(
                        "File is neither valid TOML nor JSON".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Convert between configuration formats
    pub async fn convert_format<P: AsRef<Path>>(
        input_path: P,
        output_path: P,
        output_format: ConfigFormat,
    ) -> ConfigResult<()> {
        let config = FileLoader::load(input_path).await?;
        FileLoader::save_as(output_format, &config, output_path).await
    }

    /// Generate a configuration file template.
    /// Account lists are left empty; secrets are only injected at load time.
    pub fn generate_template() -> &'static str {
        include_str!("../configs/example.toml")
    }

    /// Calculate configuration hash for change detection
    pub fn calculate_config_hash(config: &KilnConfig) -> ConfigResult<String> {
        let serialized = ConfigFormat::Toml.render(config)?;

        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        serialized.hash(&mut hasher);
        let hash = hasher.finish();

        Ok(format!("{:x}", hash))
    }

    /// Load configuration with fallback chain: primary path, then the
    /// environment profile, then a discovered config file, then the
    /// standard profile. Explicit `KILN_*` settings therefore always beat a
    /// stray discovered file.
    pub async fn load_with_fallbacks(primary_path: Option<PathBuf>) -> ConfigResult<KilnConfig> {
        // Try primary path first
        if let Some(path) = primary_path {
            if path.exists() {
                match FileLoader::load(&path).await {
                    Ok(config) => return Ok(config),
                    Err(err) => tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to load primary config"
                    ),
                }
            }
        }

        // Environment profile next
        match EnvLoader::load_from_env() {
            Ok(config) => return Ok(config),
            Err(err) => tracing::warn!(error = %err, "failed to load environment profile"),
        }

        // Then a discovered config file
        if let Ok(path) = Self::find_config_file(DEFAULT_CONFIG_FILE) {
            match FileLoader::load(&path).await {
                Ok(config) => return Ok(config),
                Err(err) => tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to load discovered config"
                ),
            }
        }

        // Final fallback: the standard profile
        KilnConfig::standard()
    }
}

/// Configuration file format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a path's extension.
    /// `Ok(None)` means no extension; unsupported extensions are an error.
    pub fn detect<P: AsRef<Path>>(path: P) -> ConfigResult<Option<ConfigFormat>> {
        match ConfigUtils::get_file_extension(path).as_deref() {
            Some("toml") => Ok(Some(ConfigFormat::Toml)),
            Some("json") => Ok(Some(ConfigFormat::Json)),
            Some(ext) => Err(ConfigError::InvalidFormat(format!(
                "Unsupported file extension: {}",
                ext
            ))),
            None => Ok(None),
        }
    }

    /// Parse a configuration document in this format
    pub fn parse(&self, content: &str) -> ConfigResult<KilnConfig> {
        match self {
            ConfigFormat::Toml => toml::from_str(content).map_err(ConfigError::Toml),
            ConfigFormat::Json => serde_json::from_str(content).map_err(ConfigError::Json),
        }
    }

    /// Render a configuration document in this format
    pub fn render(&self, config: &KilnConfig) -> ConfigResult<String> {
        match self {
            ConfigFormat::Toml => toml::to_string_pretty(config).map_err(|e| {
                ConfigError::InvalidFormat(format!("TOML serialization failed: {}", e))
            }),
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(ConfigError::Json),
        }
    }
}

impl std::str::FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(ConfigError::InvalidFormat(format!("Unknown format: {}", s))),
        }
    }
}
