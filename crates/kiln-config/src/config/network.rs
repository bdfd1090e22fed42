use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// A single named network target: where contract operations are sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// RPC endpoint URL; in-process and local targets may omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Account private keys used for signing on this target.
    /// Secrets are sourced from the environment, never written to files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<String>,

    /// Request timeout in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// Permit contracts above the EIP-170 deployed-size limit
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_unlimited_contract_size: bool,

    /// Chain identifier expected on this target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            url: None,
            accounts: Vec::new(),
            timeout_ms: None,
            allow_unlimited_contract_size: false,
            chain_id: None,
        }
    }
}

impl NetworkConfig {
    /// Validate a network target; `name` is the map key it is stored under
    pub fn validate(&self, name: &str) -> ConfigResult<()> {
        if let Some(url) = &self.url {
            if url.is_empty() {
                return Err(ConfigError::ValidationFailed(format!(
                    "Network '{}' has an empty URL",
                    name
                )));
            }
            let valid_scheme = ["http://", "https://", "ws://", "wss://"]
                .iter()
                .any(|scheme| url.starts_with(scheme));
            if !valid_scheme {
                return Err(ConfigError::ValidationFailed(format!(
                    "Network '{}' URL '{}' must use http, https, ws or wss",
                    name, url
                )));
            }
        }

        if let Some(timeout) = self.timeout_ms {
            if timeout == 0 {
                return Err(ConfigError::ValidationFailed(format!(
                    "Network '{}' timeout must be greater than 0",
                    name
                )));
            }
        }

        for account in &self.accounts {
            if account.is_empty() {
                return Err(ConfigError::ValidationFailed(format!(
                    "Network '{}' has an empty account entry",
                    name
                )));
            }
        }

        if let Some(chain_id) = self.chain_id {
            if chain_id == 0 {
                return Err(ConfigError::ValidationFailed(format!(
                    "Network '{}' chain id must be greater than 0",
                    name
                )));
            }
        }

        Ok(())
    }
}
