use crate::TokenWriter;
use alloy_primitives::{utils::format_ether, Address, TxHash, U256};
use alloy_provider::Provider;
use binding::erc20::IERC20;
use eyre::Result;
use transactor::Transactor;

/// Token writer backed by a wallet provider.
///
/// Each write builds the contract call and hands the submission closure to
/// the [`Transactor`], which owns broadcast and receipt handling.
pub struct WalletTokenWriter<P> {
    provider: P,
    transactor: Transactor,
}

impl<P> WalletTokenWriter<P>
where
    P: Provider + Clone,
{
    pub const fn new(provider: P, transactor: Transactor) -> Self {
        Self {
            provider,
            transactor,
        }
    }
}

impl<P> TokenWriter for WalletTokenWriter<P>
where
    P: Provider + Clone,
{
    async fn transfer(&self, token: Address, recipient: Address, amount: U256) -> Result<TxHash> {
        let contract = IERC20::new(token, &self.provider);
        let description = format!(
            "Transferring {} tokens to {}",
            format_ether(amount),
            recipient
        );

        let outcome = self
            .transactor
            .transact(&description, || async move {
                contract.transfer(recipient, amount).send().await
            })
            .await?;

        Ok(outcome.tx_hash)
    }

    async fn approve(&self, token: Address, spender: Address, amount: U256) -> Result<TxHash> {
        let contract = IERC20::new(token, &self.provider);
        let description = format!(
            "Approving {} to spend {} tokens",
            spender,
            format_ether(amount)
        );

        let outcome = self
            .transactor
            .transact(&description, || async move {
                contract.approve(spender, amount).send().await
            })
            .await?;

        Ok(outcome.tx_hash)
    }
}

/// Writer for sessions without a signing key.
///
/// Every write fails with a descriptive error; the panel surfaces it the
/// same way it surfaces any other write failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsigned;

impl TokenWriter for Unsigned {
    async fn transfer(&self, _token: Address, _recipient: Address, _amount: U256) -> Result<TxHash> {
        eyre::bail!("no wallet configured: transfer requires a private key")
    }

    async fn approve(&self, _token: Address, _spender: Address, _amount: U256) -> Result<TxHash> {
        eyre::bail!("no wallet configured: approve requires a private key")
    }
}
