//! Kiln Project Configuration Management
//!
//! This crate provides loading and validation for Kiln project configuration:
//! Solidity compiler settings, named network targets, and the default network
//! selection, in a Hardhat-compatible shape.

pub mod config;
pub mod error;
pub mod loader;
pub mod networks;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use loader::*;
pub use utils::{ConfigFormat, ConfigUtils};

// Re-export main types
pub use error::{ConfigError, ConfigResult};

// Re-export network presets
pub use networks::{base_sepolia_network, hardhat_network, localhost_network, KnownNetwork};
