//! Error types for redemption encoding and submission

use thiserror::Error;

use crate::address::ChainFamily;

/// Errors surfaced by every fallible operation in this crate.
///
/// Decode failures are deterministic and never retried. Submission failures
/// carry the boundary's own error untouched.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed hex text or a byte length that does not fit the field
    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid {family} address format: {reason}")]
    InvalidAddressFormat { family: ChainFamily, reason: String },

    /// No deployment artifact is known for the (chain, network) pair
    #[error("Unsupported configuration: no redeemer deployment for chain {chain} on network {network}")]
    UnsupportedConfiguration { chain: String, network: String },

    #[error("Deployment artifact error: {0}")]
    Artifact(String),

    /// Invalid connection settings (RPC URL, signing key)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The redeemer contract call failed (reverted, rejected, or unreachable)
    #[error("Redemption submission failed: {0}")]
    Submission(#[source] eyre::Report),
}

impl Error {
    pub(crate) fn invalid_address(family: ChainFamily, reason: impl Into<String>) -> Self {
        Error::InvalidAddressFormat {
            family,
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(chain: impl ToString, network: impl ToString) -> Self {
        Error::UnsupportedConfiguration {
            chain: chain.to_string(),
            network: network.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
