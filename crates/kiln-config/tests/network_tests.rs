use std::env;
use std::str::FromStr;
use std::sync::Mutex;

use kiln_config::networks::base_sepolia::{BASE_SEPOLIA_URL, WALLET_KEY_ENV_VAR};
use kiln_config::networks::localhost::LOCALHOST_TIMEOUT_MS;
use kiln_config::{
    base_sepolia_network, hardhat_network, localhost_network, ConfigError, KilnConfig,
    KnownNetwork,
};

/// Well-known throwaway development key, never funded on a real network
const TEST_WALLET_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

// Tests in this binary mutate process environment; serialize them
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_standard_profile_network_set() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var(WALLET_KEY_ENV_VAR, TEST_WALLET_KEY);

    let config = KilnConfig::standard().unwrap();

    let names: Vec<&str> = config.networks.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["base-sepolia", "hardhat", "localhost"]);

    assert_eq!(config.default_network, "hardhat");
    assert!(config.networks.contains_key(&config.default_network));
}

#[test]
fn test_base_sepolia_accounts_from_wallet_key() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var(WALLET_KEY_ENV_VAR, TEST_WALLET_KEY);

    let network = base_sepolia_network().unwrap();
    assert_eq!(network.url.as_deref(), Some(BASE_SEPOLIA_URL));
    assert_eq!(network.accounts, vec![TEST_WALLET_KEY.to_string()]);
}

#[test]
fn test_localhost_preset() {
    let network = localhost_network();
    assert_eq!(network.timeout_ms, Some(LOCALHOST_TIMEOUT_MS));
    assert_eq!(network.timeout_ms, Some(120_000));
    assert!(network.url.is_none());
    assert!(network.accounts.is_empty());
}

#[test]
fn test_hardhat_preset() {
    let network = hardhat_network();
    assert!(network.allow_unlimited_contract_size);
    assert!(network.url.is_none());
    assert!(network.accounts.is_empty());
    assert!(network.timeout_ms.is_none());
}

#[test]
fn test_missing_wallet_key_fails() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var(WALLET_KEY_ENV_VAR);

    let result = KilnConfig::standard();
    assert!(matches!(result, Err(ConfigError::EnvironmentError(_))));

    let result = base_sepolia_network();
    assert!(matches!(result, Err(ConfigError::EnvironmentError(_))));

    env::set_var(WALLET_KEY_ENV_VAR, TEST_WALLET_KEY);
}

#[test]
fn test_empty_wallet_key_fails() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var(WALLET_KEY_ENV_VAR, "");

    let result = base_sepolia_network();
    assert!(matches!(result, Err(ConfigError::EnvironmentError(_))));

    env::set_var(WALLET_KEY_ENV_VAR, TEST_WALLET_KEY);
}

#[test]
fn test_known_network_from_str() {
    assert_eq!(
        KnownNetwork::from_str("localhost").unwrap(),
        KnownNetwork::Localhost
    );
    assert_eq!(
        KnownNetwork::from_str("hardhat").unwrap(),
        KnownNetwork::Hardhat
    );
    assert_eq!(
        KnownNetwork::from_str("base-sepolia").unwrap(),
        KnownNetwork::BaseSepolia
    );
    assert_eq!(
        KnownNetwork::from_str("BASE_SEPOLIA").unwrap(),
        KnownNetwork::BaseSepolia
    );

    let result = KnownNetwork::from_str("goerli");
    assert!(matches!(result, Err(ConfigError::UnknownNetwork(_))));
}

#[test]
fn test_known_network_round_trips_through_name() {
    for network in KnownNetwork::all() {
        assert_eq!(KnownNetwork::from_str(network.as_str()).unwrap(), network);
    }
}

#[test]
fn test_compiler_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var(WALLET_KEY_ENV_VAR, TEST_WALLET_KEY);

    let config = KilnConfig::standard().unwrap();
    assert_eq!(config.solidity.version, "0.8.20");
    assert!(config.solidity.settings.via_ir);
    assert!(config.solidity.settings.optimizer.enabled);
    assert_eq!(config.solidity.settings.optimizer.runs, 200);
    assert!(config.solidity.settings.optimizer.details.constant_optimizer);
}
