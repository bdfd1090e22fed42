use crate::networks::base_sepolia::BASE_SEPOLIA_URL;
use crate::networks::KnownNetwork;
use crate::{ConfigError, ConfigResult, KilnConfig};

/// Configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, config: &KilnConfig) -> ConfigResult<()> {
        config.validate()
    }

    /// Perform comprehensive validation of a project configuration
    pub fn validate_comprehensive(config: &KilnConfig) -> ConfigResult<()> {
        // Basic validation first
        config.validate()?;

        // Additional cross-field validations
        Self::validate_remote_targets(config)?;
        Self::validate_optimizer_settings(config)?;

        Ok(())
    }

    /// Check that remote targets carry what deployments need
    fn validate_remote_targets(config: &KilnConfig) -> ConfigResult<()> {
        for (name, network) in &config.networks {
            let Some(url) = &network.url else { continue };

            if network.accounts.is_empty() {
                tracing::warn!(network = %name, "remote target has no accounts configured");
            }

            // Plain-http endpoints leak credentials on remote targets
            if url.starts_with("http://") && !is_local_endpoint(url) {
                return Err(ConfigError::ValidationFailed(format!(
                    "Network '{}' uses http:// for a non-local endpoint",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Sanity checks on optimizer tuning
    fn validate_optimizer_settings(config: &KilnConfig) -> ConfigResult<()> {
        let optimizer = &config.solidity.settings.optimizer;
        if !optimizer.enabled && config.solidity.settings.via_ir {
            tracing::warn!("via_ir without the optimizer produces large bytecode");
        }
        if optimizer.runs > 10_000_000 {
            return Err(ConfigError::ValidationFailed(format!(
                "Optimizer runs ({}) exceeds the solc maximum",
                optimizer.runs
            )));
        }
        Ok(())
    }

    /// Validate the expectations of a specific well-known target
    pub fn validate_for_network(config: &KilnConfig, expected: KnownNetwork) -> ConfigResult<()> {
        let network = config.network(expected.as_str())?;

        match expected {
            KnownNetwork::Localhost => {
                if network.timeout_ms.is_none() {
                    return Err(ConfigError::ValidationFailed(
                        "localhost target should set a request timeout".to_string(),
                    ));
                }
            }
            KnownNetwork::Hardhat => {
                if network.url.is_some() {
                    return Err(ConfigError::ValidationFailed(
                        "hardhat target is in-process and must not set a URL".to_string(),
                    ));
                }
            }
            KnownNetwork::BaseSepolia => {
                if network.url.as_deref() != Some(BASE_SEPOLIA_URL) {
                    return Err(ConfigError::ValidationFailed(format!(
                        "base-sepolia target must use {}",
                        BASE_SEPOLIA_URL
                    )));
                }
                if network.accounts.is_empty() {
                    return Err(ConfigError::ValidationFailed(
                        "base-sepolia target requires a deployment account".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Generate a configuration report
    pub fn generate_report(config: &KilnConfig) -> String {
        let mut report = String::new();

        report.push_str("Kiln Project Configuration Report\n");
        report.push_str("=================================\n\n");

        report.push_str(&format!("Solc Version: {}\n", config.solidity.version));
        report.push_str(&format!(
            "Via IR: {}\n",
            config.solidity.settings.via_ir
        ));
        report.push_str(&format!(
            "Optimizer: enabled={}, runs={}\n\n",
            config.solidity.settings.optimizer.enabled, config.solidity.settings.optimizer.runs
        ));

        report.push_str(&format!("Default Network: {}\n\n", config.default_network));

        for (name, network) in &config.networks {
            report.push_str(&format!("Network '{}':\n", name));
            report.push_str(&format!(
                "  URL: {}\n",
                network.url.as_deref().unwrap_or("(in-process/local)")
            ));
            report.push_str(&format!("  Accounts: {}\n", network.accounts.len()));
            if let Some(timeout) = network.timeout_ms {
                report.push_str(&format!("  Timeout: {}ms\n", timeout));
            }
            if network.allow_unlimited_contract_size {
                report.push_str("  Unlimited contract size: yes\n");
            }
            report.push('\n');
        }

        report
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn is_local_endpoint(url: &str) -> bool {
    url.contains("://127.0.0.1") || url.contains("://localhost") || url.contains("://0.0.0.0")
}
