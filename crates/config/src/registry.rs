//! Contract deployment registry.
//!
//! Maps `(chain id, logical contract name)` to the descriptor needed to call
//! a deployed contract. The registry is loaded once from a JSON file (the
//! same shape a deployment pipeline emits) and treated as read-only.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// Error reading the registry file
    #[error("Failed to read registry file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing the registry JSON
    #[error("Failed to parse registry: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything needed to call a deployed contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDescriptor {
    /// Deployed contract address
    pub address: Address,
    /// Interface the contract implements (e.g. "ERC20")
    pub interface: String,
}

/// Deployments keyed by chain id, then by logical contract name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentRegistry {
    deployments: BTreeMap<u64, BTreeMap<String, ContractDescriptor>>,
}

impl DeploymentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a registry from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let registry = serde_json::from_str(json)?;
        Ok(registry)
    }

    /// Look up a contract descriptor by chain id and logical name.
    ///
    /// Returns `None` when the chain has no deployments or the name is not
    /// deployed on that chain.
    pub fn lookup(&self, chain_id: u64, name: &str) -> Option<&ContractDescriptor> {
        self.deployments.get(&chain_id)?.get(name)
    }

    /// Register a deployment. Mostly useful for tests and tooling.
    pub fn insert(&mut self, chain_id: u64, name: impl Into<String>, descriptor: ContractDescriptor) {
        self.deployments
            .entry(chain_id)
            .or_default()
            .insert(name.into(), descriptor);
    }

    /// Chain ids with at least one deployment.
    pub fn chains(&self) -> impl Iterator<Item = u64> + '_ {
        self.deployments.keys().copied()
    }
}
