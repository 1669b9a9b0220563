use ::config::NetworkConfig;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Top-level console configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// RPC endpoint url for the target network
    pub rpc_url: String,

    /// Chain id of the target network
    pub chain_id: u64,

    /// Account whose balance is displayed (read-only sessions);
    /// write sessions prefer the signer's address
    pub account: Option<Address>,

    /// Logical contract name to resolve in the deployment registry
    #[serde(default = "Config::default_contract")]
    pub contract: String,

    /// Path to the deployment registry JSON file
    #[serde(default = "Config::default_deployments")]
    pub deployments: PathBuf,

    /// Prometheus exporter listen address for `watch` (disabled when unset)
    pub metrics_addr: Option<SocketAddr>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }

    /// Preset for the configured chain, if the console knows it.
    pub fn network(&self) -> Option<NetworkConfig> {
        NetworkConfig::from_chain_id(self.chain_id)
    }

    fn default_contract() -> String {
        "YourToken".to_string()
    }

    fn default_deployments() -> PathBuf {
        PathBuf::from("deployments.json")
    }
}
