//! Redeemer configuration
//!
//! # Environment Variable Schema
//!
//! ```text
//! REDEEMER_L2_CHAIN=base              # base | arbitrum
//! REDEEMER_NETWORK=sepolia            # mainnet | sepolia | local
//! REDEEMER_RPC_URL=https://...
//! REDEEMER_PRIVATE_KEY=0x...
//! REDEEMER_ARTIFACTS_DIR=./artifacts  # optional, bundled artifacts otherwise
//! ```

use eyre::{eyre, Result, WrapErr};
use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::deployment::{DeploymentRegistry, L2Chain, Network};
use crate::redact::Redacted;

/// Connection settings for one L2 redeemer
#[derive(Clone)]
pub struct RedeemerConfig {
    pub chain: L2Chain,
    pub network: Network,
    pub rpc_url: String,
    /// Signing key for redemption transactions (hex, 0x optional)
    pub private_key: Redacted<String>,
    /// Directory of deployment artifacts; bundled artifacts when unset
    pub artifacts_dir: Option<PathBuf>,
}

impl fmt::Debug for RedeemerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedeemerConfig")
            .field("chain", &self.chain)
            .field("network", &self.network)
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &self.private_key)
            .field("artifacts_dir", &self.artifacts_dir)
            .finish()
    }
}

impl RedeemerConfig {
    /// Load from `REDEEMER_*` environment variables
    pub fn from_env() -> Result<Self> {
        let chain = required("REDEEMER_L2_CHAIN")?
            .parse::<L2Chain>()
            .wrap_err("REDEEMER_L2_CHAIN")?;
        let network = required("REDEEMER_NETWORK")?
            .parse::<Network>()
            .wrap_err("REDEEMER_NETWORK")?;

        let config = Self {
            chain,
            network,
            rpc_url: required("REDEEMER_RPC_URL")?,
            private_key: Redacted::new(required("REDEEMER_PRIVATE_KEY")?),
            artifacts_dir: env::var("REDEEMER_ARTIFACTS_DIR").ok().map(PathBuf::from),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the RPC endpoint and signing key before anything is bound
    pub fn validate(&self) -> Result<()> {
        let endpoint = url::Url::parse(&self.rpc_url)
            .map_err(|e| eyre!("REDEEMER_RPC_URL is not a URL: {}", e))?;

        match endpoint.scheme() {
            "https" => {}
            "http" => tracing::warn!(
                rpc_url = %self.rpc_url,
                "Redemption RPC endpoint is plain http"
            ),
            other => return Err(eyre!("REDEEMER_RPC_URL scheme {} is not http(s)", other)),
        }

        if endpoint.host_str().is_none() {
            return Err(eyre!("REDEEMER_RPC_URL has no host"));
        }

        if self.private_key.expose().trim().is_empty() {
            return Err(eyre!("REDEEMER_PRIVATE_KEY is empty"));
        }

        Ok(())
    }

    /// Deployment registry selected by this configuration
    pub fn registry(&self) -> Result<DeploymentRegistry> {
        let registry = match &self.artifacts_dir {
            Some(dir) => DeploymentRegistry::load_dir(dir)?,
            None => DeploymentRegistry::bundled()?,
        };
        Ok(registry)
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name).map_err(|_| eyre!("{} not set", name))
}
