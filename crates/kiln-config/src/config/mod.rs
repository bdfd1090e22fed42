//! Configuration structures and types
pub mod network;
pub mod project;
pub mod solidity;

// Re-export main config types
pub use network::NetworkConfig;
pub use project::KilnConfig;
pub use solidity::OptimizerConfig;
pub use solidity::OptimizerDetails;
pub use solidity::SolidityConfig;
pub use solidity::SoliditySettings;
