//! Text rendering of the panel.
//!
//! One placeholder line while the contract descriptor is unresolved,
//! otherwise the token header, balance line, and the two form sections.

use crate::TokenPanel;
use alloy_primitives::{utils::format_ether, U256};
use std::fmt::Write;

/// Shown while no deployment is resolved for the session's chain.
pub const LOADING_PLACEHOLDER: &str = "Loading contract data...";

/// Format a smallest-unit amount as a whole-token decimal string,
/// with trailing zeros trimmed ("1", "1.5", "0.000001").
pub fn format_token_amount(amount: U256) -> String {
    let formatted = format_ether(amount);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

impl<R, W> TokenPanel<R, W> {
    /// Render the panel to a display string.
    pub fn render(&self) -> String {
        if self.descriptor().is_none() {
            return LOADING_PLACEHOLDER.to_string();
        }

        let view = &self.view;
        let forms = &self.forms;
        let mut out = String::new();

        let _ = writeln!(
            out,
            "You are now interacting with: {} ({})",
            view.name, view.symbol
        );
        let _ = writeln!(
            out,
            "Your Balance: {} {}",
            format_token_amount(view.balance),
            view.symbol
        );

        if let Some(error) = &view.last_error {
            let _ = writeln!(out, "Warning: {}", error);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Transfer Tokens");
        let _ = writeln!(out, "  recipient: {}", field(&forms.recipient));
        let _ = writeln!(out, "  amount:    {}", field(&forms.amount));
        let _ = writeln!(out, "  {}", status(forms.transfer_ready()));

        let _ = writeln!(out);
        let _ = writeln!(out, "Approve Spender");
        let _ = writeln!(out, "  spender: {}", field(&forms.spender));
        let _ = writeln!(out, "  amount:  {}", field(&forms.amount));
        let _ = writeln!(out, "  {}", status(forms.approve_ready()));

        out
    }
}

fn field(value: &str) -> &str {
    if value.is_empty() {
        "<empty>"
    } else {
        value
    }
}

const fn status(ready: bool) -> &'static str {
    if ready {
        "[ready]"
    } else {
        "[disabled]"
    }
}
