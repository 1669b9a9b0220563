//! Form inputs and their validation.
//!
//! The transfer and approve forms share the amount field, exactly as the
//! page presents them. Validation never errors: a field either parses or
//! its submit action stays disabled.

use alloy_primitives::{utils::parse_ether, Address, U256};

/// Ephemeral form state. Reset only by dropping the panel, not by
/// successful submission.
#[derive(Debug, Clone, Default)]
pub struct Forms {
    /// Transfer recipient address (text)
    pub recipient: String,
    /// Approval spender address (text)
    pub spender: String,
    /// Token amount in whole-token decimal notation, shared by both forms
    pub amount: String,
}

impl Forms {
    /// True when the transfer form can be submitted.
    pub fn transfer_ready(&self) -> bool {
        parse_address(&self.recipient).is_some() && parse_amount(&self.amount).is_some()
    }

    /// True when the approve form can be submitted.
    pub fn approve_ready(&self) -> bool {
        parse_address(&self.spender).is_some() && parse_amount(&self.amount).is_some()
    }
}

/// Parse a well-formed chain address, or `None`.
pub fn parse_address(input: &str) -> Option<Address> {
    input.trim().parse().ok()
}

/// Parse a decimal token amount into its smallest-unit representation
/// (18 decimals), or `None` for empty or malformed input.
pub fn parse_amount(input: &str) -> Option<U256> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    parse_ether(input).ok()
}
