//! Token read/write clients.
//!
//! This crate provides the two seams the panel talks through: a
//! [`TokenReader`] for read-only contract queries and a [`TokenWriter`] for
//! wallet-signed writes. The production implementations sit on top of an
//! alloy provider; tests substitute mocks.

pub mod reader;
pub mod writer;

use alloy_primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Token metadata and balance as read at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Balance of the queried holder, in smallest units
    pub balance: U256,
}

/// Read-only token contract queries.
pub trait TokenReader: Send + Sync {
    /// Read the token name.
    fn name(&self, token: Address) -> impl Future<Output = eyre::Result<String>> + Send;

    /// Read the token symbol.
    fn symbol(&self, token: Address) -> impl Future<Output = eyre::Result<String>> + Send;

    /// Read the token balance of a holder, in smallest units.
    fn balance_of(
        &self,
        token: Address,
        holder: Address,
    ) -> impl Future<Output = eyre::Result<U256>> + Send;
}

/// Wallet-signed token contract writes.
pub trait TokenWriter: Send + Sync {
    /// Transfer tokens to a recipient. Returns the confirmed transaction hash.
    fn transfer(
        &self,
        token: Address,
        recipient: Address,
        amount: U256,
    ) -> impl Future<Output = eyre::Result<TxHash>> + Send;

    /// Approve a spender for an amount. Returns the confirmed transaction hash.
    fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> impl Future<Output = eyre::Result<TxHash>> + Send;
}
