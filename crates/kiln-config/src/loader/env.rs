use std::env;
use std::str::FromStr;

use crate::{ConfigError, ConfigResult, KilnConfig};

/// Environment variable-based configuration loader
pub struct EnvLoader;

impl EnvLoader {
    /// Load configuration from the environment.
    ///
    /// Reads a `.env` file when present, starts from the standard project
    /// profile and applies `KILN_*` overrides on top of it.
    pub fn load_from_env() -> ConfigResult<KilnConfig> {
        dotenv::dotenv().ok();

        let mut config = KilnConfig::standard()?;

        Self::apply_solidity_overrides(&mut config)?;
        Self::apply_network_overrides(&mut config)?;

        config.validate()?;
        Ok(config)
    }

    /// Apply compiler configuration overrides from environment
    fn apply_solidity_overrides(config: &mut KilnConfig) -> ConfigResult<()> {
        if let Ok(version) = env::var("KILN_SOLC_VERSION") {
            config.solidity.version = version;
        }

        if let Ok(via_ir) = env::var("KILN_VIA_IR") {
            config.solidity.settings.via_ir = via_ir
                .parse()
                .map_err(|_| ConfigError::EnvironmentError("Invalid KILN_VIA_IR".to_string()))?;
        }

        if let Ok(enabled) = env::var("KILN_OPTIMIZER_ENABLED") {
            config.solidity.settings.optimizer.enabled = enabled.parse().map_err(|_| {
                ConfigError::EnvironmentError("Invalid KILN_OPTIMIZER_ENABLED".to_string())
            })?;
        }

        if let Ok(runs) = env::var("KILN_OPTIMIZER_RUNS") {
            config.solidity.settings.optimizer.runs = runs.parse().map_err(|_| {
                ConfigError::EnvironmentError("Invalid KILN_OPTIMIZER_RUNS".to_string())
            })?;
        }

        if let Ok(constant) = env::var("KILN_CONSTANT_OPTIMIZER") {
            config.solidity.settings.optimizer.details.constant_optimizer =
                constant.parse().map_err(|_| {
                    ConfigError::EnvironmentError("Invalid KILN_CONSTANT_OPTIMIZER".to_string())
                })?;
        }

        Ok(())
    }

    /// Apply network configuration overrides from environment
    fn apply_network_overrides(config: &mut KilnConfig) -> ConfigResult<()> {
        if let Ok(default_network) = env::var("KILN_DEFAULT_NETWORK") {
            if !config.networks.contains_key(&default_network) {
                return Err(ConfigError::EnvironmentError(format!(
                    "Invalid KILN_DEFAULT_NETWORK: unknown network '{}'",
                    default_network
                )));
            }
            config.default_network = default_network;
        }

        if let Some(timeout_ms) = Self::get_env_var::<u64>("KILN_LOCALHOST_TIMEOUT_MS")? {
            if let Some(localhost) = config.networks.get_mut("localhost") {
                localhost.timeout_ms = Some(timeout_ms);
            }
        }

        Ok(())
    }

    /// Get a typed environment variable value
    pub fn get_env_var<T: FromStr>(key: &str) -> ConfigResult<Option<T>> {
        match env::var(key) {
            Ok(value) => value.parse().map(Some).map_err(|_| {
                ConfigError::EnvironmentError(format!("Invalid value for {}: {}", key, value))
            }),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::EnvironmentError(format!(
                "Non-Unicode value for {}",
                key
            ))),
        }
    }

    /// Get a required environment variable
    pub fn get_required_env_var<T: FromStr>(key: &str) -> ConfigResult<T> {
        let value = env::var(key).map_err(|_| {
            ConfigError::EnvironmentError(format!(
                "Required environment variable {} not found",
                key
            ))
        })?;

        value.parse().map_err(|_| {
            ConfigError::EnvironmentError(format!("Invalid value for {}: {}", key, value))
        })
    }

    /// List all Kiln-related environment variables
    pub fn list_kiln_env_vars() -> Vec<(String, String)> {
        env::vars().filter(|(key, _)| key.starts_with("KILN_")).collect()
    }
}
