//! Network configuration for the token console.
//!
//! Provides chain-specific parameters for the networks the console knows
//! about (mainnet, testnet, local devnet).

use serde::{Deserialize, Serialize};

/// Network type (mainnet, testnet, or local devnet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkType {
    Mainnet,
    Testnet,
    Local,
}

/// A network the console can target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network type
    pub network_type: NetworkType,
    /// Chain ID
    pub chain_id: u64,
    /// Human-readable network name
    pub name: String,
    /// Block time in seconds (12 for Ethereum mainnet)
    pub block_time_secs: u64,
}

impl NetworkConfig {
    /// Ethereum mainnet configuration.
    pub fn mainnet() -> Self {
        Self {
            network_type: NetworkType::Mainnet,
            chain_id: 1,
            name: "mainnet".to_string(),
            block_time_secs: 12,
        }
    }

    /// Ethereum Sepolia testnet configuration.
    pub fn sepolia() -> Self {
        Self {
            network_type: NetworkType::Testnet,
            chain_id: 11155111,
            name: "sepolia".to_string(),
            block_time_secs: 12,
        }
    }

    /// Local devnet configuration (anvil/hardhat default chain id).
    pub fn local() -> Self {
        Self {
            network_type: NetworkType::Local,
            chain_id: 31337,
            name: "local".to_string(),
            block_time_secs: 1,
        }
    }

    /// Resolve a known network from its chain id.
    ///
    /// Returns `None` for chains the console has no preset for; callers can
    /// still construct a [`NetworkConfig`] by hand in that case.
    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            1 => Some(Self::mainnet()),
            11155111 => Some(Self::sepolia()),
            31337 => Some(Self::local()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_config() {
        let config = NetworkConfig::mainnet();
        assert_eq!(config.chain_id, 1);
        assert_eq!(config.network_type, NetworkType::Mainnet);
    }

    #[test]
    fn test_from_chain_id() {
        let config = NetworkConfig::from_chain_id(11155111).unwrap();
        assert_eq!(config.name, "sepolia");
        assert_eq!(config.network_type, NetworkType::Testnet);

        assert!(NetworkConfig::from_chain_id(424242).is_none());
    }

    #[test]
    fn test_local_config() {
        let config = NetworkConfig::local();
        assert_eq!(config.chain_id, 31337);
        assert_eq!(config.block_time_secs, 1);
    }
}
