//! tBTC-Redeemer-RS: Cross-Chain Redemption Encoding
//!
//! This crate provides the client-side encoding used when moving tBTC
//! between Bitcoin and L2 chains:
//!
//! - **Hex** - Immutable byte sequences with prefixed/unprefixed hex forms
//! - **Hash Computation** - sha256, hash256 and hash160 wallet identities
//! - **Addresses** - EVM, Sui and Solana deposit owner addresses
//! - **Extra Data** - 32-byte deposit extra-data codec per chain family
//! - **Redeemer** - Bitcoin redemption request builder over an L2 redeemer
//! - **EVM Module** - alloy bindings for `L2BitcoinRedeemer`
//!
//! ## Usage
//!
//! ```ignore
//! use tbtc_redeemer_rs::{BitcoinRedeemer, Hex, RedeemerConfig, UtxoReference};
//!
//! let config = RedeemerConfig::from_env()?;
//! let redeemer = BitcoinRedeemer::connect(&config, &config.registry()?)?;
//! let tx_hash = redeemer
//!     .request_redemption(&wallet_public_key, &main_utxo, &encoded_vm)
//!     .await?;
//! ```
//!
//! ## Feature Flags
//!
//! - `evm` - Enable the alloy-backed redeemer client (default)

pub mod address;
pub mod bytes;
pub mod config;
pub mod deployment;
pub mod error;
pub mod extra_data;
pub mod hash;
pub mod redact;
pub mod redeemer;
pub mod utxo;

#[cfg(feature = "evm")]
pub mod evm;

// Re-export commonly used items at the crate root
pub use address::{Address, ChainFamily, EvmAddress, SolanaAddress, SuiAddress};
pub use bytes::Hex;
pub use config::RedeemerConfig;
pub use deployment::{DeploymentArtifact, DeploymentRegistry, L2Chain, Network};
pub use error::{Error, Result};
pub use extra_data::{ExtraData, ExtraDataEncoder, EXTRA_DATA_LEN};
pub use hash::{compute_hash160, hash160, hash256, keccak256, sha256};
pub use redeemer::{
    build_request_params, BitcoinRedeemer, RedeemerContract, RedemptionRequestParams,
};
pub use utxo::{MainUtxoParam, UtxoReference};

#[cfg(feature = "evm")]
pub use evm::EvmRedeemerContract;
