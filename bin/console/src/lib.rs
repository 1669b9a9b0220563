pub mod config;
pub mod metrics;

use ::config::DeploymentRegistry;
use alloy_primitives::Address;
use crate::config::Config;
use panel::{Session, TokenPanel};
use token::{TokenReader, TokenWriter};

/// Load the deployment registry named by the config.
pub fn load_registry(config: &Config) -> eyre::Result<DeploymentRegistry> {
    let registry = DeploymentRegistry::from_file(&config.deployments)?;
    Ok(registry)
}

/// Build a panel over the configured contract.
///
/// `account` wins over the config's account; write sessions pass the
/// signer's address there.
pub fn build_panel<R, W>(
    reader: R,
    writer: W,
    registry: DeploymentRegistry,
    config: &Config,
    account: Option<Address>,
) -> TokenPanel<R, W>
where
    R: TokenReader,
    W: TokenWriter,
{
    let session = Session::new(config.chain_id, account.or(config.account));
    TokenPanel::new(reader, writer, registry, config.contract.clone(), session)
}
