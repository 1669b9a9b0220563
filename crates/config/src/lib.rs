//! Configuration types for the token console.
//!
//! This crate provides:
//! - Network configurations (mainnet, testnet, local)
//! - The contract deployment registry keyed by chain id

pub mod network;
pub mod registry;

pub use network::{NetworkConfig, NetworkType};
pub use registry::{ContractDescriptor, DeploymentRegistry, RegistryError};
