use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Canonical solc release targeted by new projects
pub const DEFAULT_SOLC_VERSION: &str = "0.8.20";

/// Optimizer runs tuning the deployment cost vs execution cost tradeoff
pub const DEFAULT_OPTIMIZER_RUNS: u32 = 200;

/// Solidity compiler configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidityConfig {
    /// Semantic version of the solc release to compile with
    pub version: String,

    /// Compiler settings passed through to solc
    #[serde(default)]
    pub settings: SoliditySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoliditySettings {
    /// Compile through the Yul intermediate representation pipeline
    pub via_ir: bool,

    /// Bytecode optimizer settings
    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Enable the bytecode optimizer
    pub enabled: bool,

    /// Expected number of contract executions the optimizer tunes for
    pub runs: u32,

    /// Fine-grained optimizer component toggles
    #[serde(default)]
    pub details: OptimizerDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerDetails {
    /// Precompute constant expressions at compile time
    pub constant_optimizer: bool,
}

impl Default for SolidityConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_SOLC_VERSION.to_string(),
            settings: SoliditySettings::default(),
        }
    }
}

impl Default for SoliditySettings {
    fn default() -> Self {
        Self {
            via_ir: true,
            optimizer: OptimizerConfig::default(),
        }
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            runs: DEFAULT_OPTIMIZER_RUNS,
            details: OptimizerDetails::default(),
        }
    }
}

impl Default for OptimizerDetails {
    fn default() -> Self {
        Self {
            constant_optimizer: true,
        }
    }
}

impl SolidityConfig {
    /// Validate compiler configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.version.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Compiler version cannot be empty".to_string(),
            ));
        }

        // solc releases are plain x.y.z versions
        let parts: Vec<&str> = self.version.split('.').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty() || p.parse::<u32>().is_err()) {
            return Err(ConfigError::ValidationFailed(format!(
                "Compiler version '{}' is not a valid x.y.z version",
                self.version
            )));
        }

        if self.settings.optimizer.enabled && self.settings.optimizer.runs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Optimizer runs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
