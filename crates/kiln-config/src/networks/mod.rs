//! Well-known network target presets

pub mod base_sepolia;
pub mod hardhat;
pub mod localhost;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KnownNetwork {
    Localhost,
    Hardhat,
    BaseSepolia,
}

impl KnownNetwork {
    /// The network name used as a map key in project configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            KnownNetwork::Localhost => "localhost",
            KnownNetwork::Hardhat => "hardhat",
            KnownNetwork::BaseSepolia => "base-sepolia",
        }
    }

    /// All well-known targets in the standard project profile
    pub fn all() -> [KnownNetwork; 3] {
        [
            KnownNetwork::Localhost,
            KnownNetwork::Hardhat,
            KnownNetwork::BaseSepolia,
        ]
    }
}

impl std::str::FromStr for KnownNetwork {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "localhost" | "local" => Ok(KnownNetwork::Localhost),
            "hardhat" => Ok(KnownNetwork::Hardhat),
            "base-sepolia" | "base_sepolia" => Ok(KnownNetwork::BaseSepolia),
            _ => Err(crate::error::ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

impl std::fmt::Display for KnownNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Re-export network presets
pub use base_sepolia::base_sepolia_network;
pub use hardhat::hardhat_network;
pub use localhost::localhost_network;
