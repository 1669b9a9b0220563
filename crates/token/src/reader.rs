use crate::TokenReader;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use binding::erc20::IERC20;
use eyre::Result;
use tracing::debug;

/// Token reader backed by an rpc provider.
pub struct RpcTokenReader<P> {
    provider: P,
}

impl<P> RpcTokenReader<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P> TokenReader for RpcTokenReader<P>
where
    P: Provider + Clone,
{
    async fn name(&self, token: Address) -> Result<String> {
        debug!("Querying erc20 {} name", token);

        let contract = IERC20::new(token, &self.provider);
        let name = contract.name().call().await?;

        Ok(name)
    }

    async fn symbol(&self, token: Address) -> Result<String> {
        debug!("Querying erc20 {} symbol", token);

        let contract = IERC20::new(token, &self.provider);
        let symbol = contract.symbol().call().await?;

        Ok(symbol)
    }

    async fn balance_of(&self, token: Address, holder: Address) -> Result<U256> {
        debug!("Querying erc20 {} balance: holder={}", token, holder);

        let contract = IERC20::new(token, &self.provider);
        let amount = contract.balanceOf(holder).call().await?;

        Ok(amount)
    }
}
