use crate::config::NetworkConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::loader::EnvLoader;

/// Public RPC endpoint for the Base Sepolia testnet
pub const BASE_SEPOLIA_URL: &str = "https://sepolia.base.org";

/// Environment variable holding the deployment account private key
pub const WALLET_KEY_ENV_VAR: &str = "WALLET_KEY";

/// Create the `base-sepolia` target: the remote Base Sepolia testnet.
///
/// The single deployment account is sourced from `WALLET_KEY`; a missing or
/// empty value is a startup error so deployments never run unsigned.
pub fn base_sepolia_network() -> ConfigResult<NetworkConfig> {
    let wallet_key: String = EnvLoader::get_required_env_var(WALLET_KEY_ENV_VAR)?;
    if wallet_key.is_empty() {
        return Err(ConfigError::EnvironmentError(format!(
            "{} cannot be empty",
            WALLET_KEY_ENV_VAR
        )));
    }

    Ok(NetworkConfig {
        url: Some(BASE_SEPOLIA_URL.to_string()),
        accounts: vec![wallet_key],
        ..NetworkConfig::default()
    })
}
