//! Transaction submission pipeline.
//!
//! The transactor accepts a zero-argument submission closure (built by the
//! caller around a contract write call), broadcasts it through the wallet
//! provider, waits for the receipt, and reports the outcome. Callers stay
//! out of the receipt/confirmation business entirely.

use alloy_network::Ethereum;
use alloy_primitives::TxHash;
use alloy_provider::PendingTransactionBuilder;
use alloy_rpc_types_eth::TransactionReceipt;
use std::future::Future;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum TransactError {
    /// Signing or broadcast failed before a transaction hash existed.
    /// Covers user rejection, bad nonce, and RPC transport errors.
    #[error("Transaction submission failed: {0}")]
    Submit(String),

    /// The transaction was broadcast but the receipt wait failed
    #[error("Receipt wait failed: {0}")]
    Receipt(String),

    /// The transaction was mined but reverted
    #[error("Transaction reverted: {tx_hash}")]
    Reverted {
        /// Hash of the reverted transaction
        tx_hash: TxHash,
    },
}

/// Result of a confirmed transaction.
#[derive(Debug, Clone)]
pub struct TxOutcome {
    /// Transaction hash
    pub tx_hash: TxHash,
    /// Block number where the transaction was included
    pub block_number: Option<u64>,
    /// Gas used
    pub gas_used: u64,
}

/// Submits write transactions and waits for their receipts.
#[derive(Debug, Clone)]
pub struct Transactor {
    confirmations: u64,
}

impl Default for Transactor {
    fn default() -> Self {
        Self::new()
    }
}

impl Transactor {
    /// Create a transactor that waits for one confirmation.
    pub const fn new() -> Self {
        Self { confirmations: 1 }
    }

    /// Override the number of confirmations to wait for.
    pub const fn with_confirmations(mut self, confirmations: u64) -> Self {
        self.confirmations = confirmations;
        self
    }

    /// Run a submission closure to completion.
    ///
    /// `submit` performs the actual wallet write (sign + broadcast) and
    /// returns the pending transaction; the transactor waits for the receipt
    /// and verifies it did not revert.
    pub async fn transact<F, Fut>(
        &self,
        description: &str,
        submit: F,
    ) -> Result<TxOutcome, TransactError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<PendingTransactionBuilder<Ethereum>, alloy_contract::Error>>,
    {
        info!(action = description, "Submitting transaction");

        let pending = submit()
            .await
            .map_err(|e| TransactError::Submit(e.to_string()))?;

        let receipt = pending
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await
            .map_err(|e| TransactError::Receipt(e.to_string()))?;

        classify_receipt(description, &receipt)
    }
}

/// Turn a mined receipt into an outcome, treating reverts as errors.
fn classify_receipt(
    description: &str,
    receipt: &TransactionReceipt,
) -> Result<TxOutcome, TransactError> {
    if !receipt.status() {
        warn!(tx_hash = %receipt.transaction_hash, action = description, "Transaction reverted");
        return Err(TransactError::Reverted {
            tx_hash: receipt.transaction_hash,
        });
    }

    info!(
        tx_hash = %receipt.transaction_hash,
        block_number = receipt.block_number,
        gas_used = receipt.gas_used,
        action = description,
        "Transaction confirmed."
    );

    Ok(TxOutcome {
        tx_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
        gas_used: receipt.gas_used,
    })
}
