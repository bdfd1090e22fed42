use std::env;
use std::sync::Mutex;

use kiln_config::networks::base_sepolia::WALLET_KEY_ENV_VAR;
use kiln_config::validation::ConfigValidator;
use kiln_config::{ConfigError, KilnConfig, KnownNetwork, NetworkConfig};

const TEST_WALLET_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn standard_config() -> KilnConfig {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var(WALLET_KEY_ENV_VAR, TEST_WALLET_KEY);
    KilnConfig::standard().unwrap()
}

/// Test valid configuration validation
#[test]
fn test_valid_configuration_validation() {
    let validator = ConfigValidator::new();
    let config = standard_config();

    assert!(validator.validate(&config).is_ok());
    assert!(ConfigValidator::validate_comprehensive(&config).is_ok());
}

/// Test default network membership invariant
#[test]
fn test_dangling_default_network() {
    let mut config = standard_config();
    config.default_network = "goerli".to_string();

    let result = config.validate();
    assert!(matches!(result, Err(ConfigError::UnknownNetwork(_))));

    // Empty default network is rejected too
    config.default_network = String::new();
    let result = config.validate();
    assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));

    // A valid member passes
    config.default_network = "localhost".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_network_map_rejected() {
    let mut config = standard_config();
    config.networks.clear();

    let result = config.validate();
    assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
}

/// Test compiler settings validation
#[test]
fn test_compiler_validation() {
    let mut config = standard_config();

    // Zero optimizer runs with the optimizer enabled
    config.solidity.settings.optimizer.runs = 0;
    assert!(config.validate().is_err());

    config.solidity.settings.optimizer.runs = 200;
    assert!(config.validate().is_ok());

    // Malformed versions
    for version in ["", "0.8", "latest", "0.8.x", "0.8.20.1"] {
        config.solidity.version = version.to_string();
        assert!(
            config.validate().is_err(),
            "Version '{}' should be rejected",
            version
        );
    }

    config.solidity.version = "0.8.20".to_string();
    assert!(config.validate().is_ok());
}

/// Test network target validation
#[test]
fn test_network_target_validation() {
    let mut config = standard_config();

    // Zero timeout
    config
        .networks
        .get_mut("localhost")
        .unwrap()
        .timeout_ms = Some(0);
    assert!(config.validate().is_err());

    config
        .networks
        .get_mut("localhost")
        .unwrap()
        .timeout_ms = Some(120_000);
    assert!(config.validate().is_ok());

    // Invalid URL scheme
    config.networks.insert(
        "bad".to_string(),
        NetworkConfig {
            url: Some("ftp://sepolia.base.org".to_string()),
            ..NetworkConfig::default()
        },
    );
    assert!(config.validate().is_err());
    config.networks.remove("bad");

    // Empty account entry
    config
        .networks
        .get_mut("base-sepolia")
        .unwrap()
        .accounts
        .push(String::new());
    assert!(config.validate().is_err());
}

/// Test per-target expectations for well-known networks
#[test]
fn test_validate_for_network() {
    let mut config = standard_config();

    for network in KnownNetwork::all() {
        assert!(
            ConfigValidator::validate_for_network(&config, network).is_ok(),
            "Standard profile should satisfy '{}'",
            network
        );
    }

    // In-process target must not carry a URL
    config.networks.get_mut("hardhat").unwrap().url =
        Some("http://127.0.0.1:8545".to_string());
    assert!(ConfigValidator::validate_for_network(&config, KnownNetwork::Hardhat).is_err());
    config.networks.get_mut("hardhat").unwrap().url = None;

    // Local node target should keep a timeout
    config.networks.get_mut("localhost").unwrap().timeout_ms = None;
    assert!(ConfigValidator::validate_for_network(&config, KnownNetwork::Localhost).is_err());
    config.networks.get_mut("localhost").unwrap().timeout_ms = Some(120_000);

    // Testnet target must point at the canonical endpoint with an account
    config.networks.get_mut("base-sepolia").unwrap().url =
        Some("https://example.org".to_string());
    assert!(
        ConfigValidator::validate_for_network(&config, KnownNetwork::BaseSepolia).is_err()
    );
}

/// Test cross-field checks beyond basic validation
#[test]
fn test_comprehensive_validation() {
    let mut config = standard_config();

    // Plain http on a remote endpoint is rejected
    config.networks.get_mut("base-sepolia").unwrap().url =
        Some("http://sepolia.base.org".to_string());
    assert!(ConfigValidator::validate_comprehensive(&config).is_err());

    // Plain http on a local endpoint is fine
    config.networks.get_mut("base-sepolia").unwrap().url =
        Some("http://127.0.0.1:8545".to_string());
    assert!(ConfigValidator::validate_comprehensive(&config).is_ok());

    // Optimizer runs beyond the solc maximum
    config.networks.get_mut("base-sepolia").unwrap().url =
        Some("https://sepolia.base.org".to_string());
    config.solidity.settings.optimizer.runs = 20_000_000;
    assert!(ConfigValidator::validate_comprehensive(&config).is_err());
}

/// Test the human-readable configuration report
#[test]
fn test_generate_report() {
    let config = standard_config();
    let report = ConfigValidator::generate_report(&config);

    assert!(report.contains("Solc Version: 0.8.20"));
    assert!(report.contains("Default Network: hardhat"));
    assert!(report.contains("Network 'localhost'"));
    assert!(report.contains("Network 'base-sepolia'"));
    assert!(report.contains("Unlimited contract size: yes"));
}
