use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::networks::KnownNetwork;

use super::*;

/// Main project configuration for the Kiln toolchain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KilnConfig {
    /// Solidity compiler settings
    #[serde(default)]
    pub solidity: SolidityConfig,

    /// Named network targets, keyed by unique network name
    pub networks: BTreeMap<String, NetworkConfig>,

    /// Network used when no explicit target is given
    pub default_network: String,
}

impl KilnConfig {
    /// Create the standard project configuration: the `localhost`, `hardhat`
    /// and `base-sepolia` targets with `hardhat` as the default network.
    ///
    /// Reads `WALLET_KEY` from the environment for the `base-sepolia`
    /// account list and fails when it is absent.
    pub fn standard() -> ConfigResult<Self> {
        let mut networks = BTreeMap::new();
        networks.insert(
            KnownNetwork::Localhost.as_str().to_string(),
            crate::networks::localhost_network(),
        );
        networks.insert(
            KnownNetwork::Hardhat.as_str().to_string(),
            crate::networks::hardhat_network(),
        );
        networks.insert(
            KnownNetwork::BaseSepolia.as_str().to_string(),
            crate::networks::base_sepolia_network()?,
        );

        let config = Self {
            solidity: SolidityConfig::default(),
            networks,
            default_network: KnownNetwork::Hardhat.as_str().to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> ConfigResult<()> {
        self.solidity.validate()?;

        if self.networks.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "At least one network target must be configured".to_string(),
            ));
        }

        for (name, network) in &self.networks {
            if name.is_empty() {
                return Err(ConfigError::ValidationFailed(
                    "Network name cannot be empty".to_string(),
                ));
            }
            network.validate(name)?;
        }

        self.validate_default_network()?;

        Ok(())
    }

    /// Check that `default_network` resolves to a configured target
    fn validate_default_network(&self) -> ConfigResult<()> {
        if self.default_network.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Default network cannot be empty".to_string(),
            ));
        }
        if !self.networks.contains_key(&self.default_network) {
            return Err(ConfigError::UnknownNetwork(format!(
                "Default network '{}' is not a configured target",
                self.default_network
            )));
        }
        Ok(())
    }

    /// Get the network target the configuration points at by default
    pub fn default_target(&self) -> ConfigResult<&NetworkConfig> {
        self.networks
            .get(&self.default_network)
            .ok_or_else(|| ConfigError::UnknownNetwork(self.default_network.clone()))
    }

    /// Get a network target by name
    pub fn network(&self, name: &str) -> ConfigResult<&NetworkConfig> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
    }
}
