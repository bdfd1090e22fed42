use crate::config::NetworkConfig;

/// Timeout for the local JSON-RPC node, generous enough for tracing calls
pub const LOCALHOST_TIMEOUT_MS: u64 = 120_000;

/// Create the `localhost` target: a separately running local JSON-RPC node
pub fn localhost_network() -> NetworkConfig {
    NetworkConfig {
        timeout_ms: Some(LOCALHOST_TIMEOUT_MS),
        ..NetworkConfig::default()
    }
}
