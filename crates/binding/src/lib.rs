//! Contract bindings for the token console.
//!
//! The console only talks to ERC20 token contracts. The interface is
//! generated with alloy's `sol!` macro.

pub mod erc20;
