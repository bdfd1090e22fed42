use crate::config::NetworkConfig;

/// Create the `hardhat` target: the in-process ephemeral development network.
/// Runs without an RPC endpoint and lifts the EIP-170 contract size limit so
/// unoptimized test builds always deploy.
pub fn hardhat_network() -> NetworkConfig {
    NetworkConfig {
        allow_unlimited_contract_size: true,
        ..NetworkConfig::default()
    }
}
