//! EVM Redeemer Support
//!
//! Binds [`crate::redeemer::BitcoinRedeemer`] to `L2BitcoinRedeemer`
//! deployments on EVM L2 chains (Base, Arbitrum).
//!
//! ## Submodules
//!
//! - `contracts` - Redeemer contract bindings using alloy sol! macro
//! - `redeemer` - Signing client implementing [`crate::redeemer::RedeemerContract`]

pub mod contracts;
pub mod redeemer;

pub use contracts::L2BitcoinRedeemer;
pub use redeemer::EvmRedeemerContract;
