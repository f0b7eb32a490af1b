//! Redeemer Deployment Lookup
//!
//! Each L2 chain and network has its own `L2BitcoinRedeemer` deployment.
//! Artifacts are static configuration: they are loaded once into an
//! immutable [`DeploymentRegistry`] and a missing entry is a configuration
//! error, raised when a redeemer is constructed.
//!
//! ## Artifact Layout
//!
//! ```text
//! <artifacts_dir>/<chain>/<network>/L2BitcoinRedeemer.json
//! ```
//!
//! Only `address` and the optional `transactionHash` and `receipt.blockNumber`
//! fields of the artifact are read.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::address::EvmAddress;
use crate::bytes::Hex;
use crate::error::{Error, Result};

/// Artifact file name for the redeemer contract
pub const REDEEMER_ARTIFACT: &str = "L2BitcoinRedeemer.json";

// ============================================================================
// Chain / Network Identifiers
// ============================================================================

/// L2 chains hosting a Bitcoin redeemer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum L2Chain {
    Base,
    Arbitrum,
}

impl L2Chain {
    pub const ALL: [L2Chain; 2] = [L2Chain::Base, L2Chain::Arbitrum];

    pub fn as_str(&self) -> &'static str {
        match self {
            L2Chain::Base => "base",
            L2Chain::Arbitrum => "arbitrum",
        }
    }
}

impl fmt::Display for L2Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for L2Chain {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(L2Chain::Base),
            "arbitrum" => Ok(L2Chain::Arbitrum),
            _ => Err(Error::unsupported(name, "any")),
        }
    }
}

/// Network a deployment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Sepolia,
    /// Local development node (Anvil)
    Local,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Sepolia, Network::Local];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Sepolia => "sepolia",
            Network::Local => "local",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "sepolia" => Ok(Network::Sepolia),
            "local" | "anvil" => Ok(Network::Local),
            _ => Err(Error::unsupported("any", name)),
        }
    }
}

// ============================================================================
// Artifacts
// ============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactFile {
    address: String,
    #[serde(default)]
    transaction_hash: Option<Hex>,
    #[serde(default)]
    block_number: Option<u64>,
    #[serde(default)]
    receipt: Option<ArtifactReceipt>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactReceipt {
    #[serde(default)]
    block_number: Option<u64>,
}

/// A resolved redeemer deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentArtifact {
    pub chain: L2Chain,
    pub network: Network,
    /// Redeemer contract address
    pub address: EvmAddress,
    /// Deployment transaction, when recorded
    pub transaction_hash: Option<Hex>,
    /// Block the deployment was mined in, when recorded
    pub block_number: Option<u64>,
}

impl DeploymentArtifact {
    /// Parse an artifact JSON document
    pub fn from_json(chain: L2Chain, network: Network, json: &str) -> Result<Self> {
        let file: ArtifactFile = serde_json::from_str(json).map_err(|e| {
            Error::Artifact(format!("invalid artifact for {}/{}: {}", chain, network, e))
        })?;

        let address = file.address.parse().map_err(|e| {
            Error::Artifact(format!("bad address in {}/{} artifact: {}", chain, network, e))
        })?;

        let block_number = file
            .block_number
            .or_else(|| file.receipt.and_then(|r| r.block_number));

        Ok(Self {
            chain,
            network,
            address,
            transaction_hash: file.transaction_hash,
            block_number,
        })
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable (chain, network) → deployment mapping
#[derive(Debug, Clone, Default)]
pub struct DeploymentRegistry {
    artifacts: HashMap<(L2Chain, Network), DeploymentArtifact>,
}

impl DeploymentRegistry {
    /// Build from a set of artifacts; later entries replace earlier ones
    pub fn from_artifacts(artifacts: impl IntoIterator<Item = DeploymentArtifact>) -> Self {
        let artifacts = artifacts
            .into_iter()
            .map(|a| ((a.chain, a.network), a))
            .collect();
        Self { artifacts }
    }

    /// Artifacts compiled into the crate (local development deployments)
    pub fn bundled() -> Result<Self> {
        let artifacts = vec![
            DeploymentArtifact::from_json(
                L2Chain::Base,
                Network::Local,
                include_str!("../artifacts/base/local/L2BitcoinRedeemer.json"),
            )?,
            DeploymentArtifact::from_json(
                L2Chain::Arbitrum,
                Network::Local,
                include_str!("../artifacts/arbitrum/local/L2BitcoinRedeemer.json"),
            )?,
        ];
        Ok(Self::from_artifacts(artifacts))
    }

    /// Load every `<chain>/<network>/L2BitcoinRedeemer.json` under `dir`.
    ///
    /// `dir` itself must exist. Missing files under it are skipped;
    /// unreadable or malformed files fail.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::Artifact(format!(
                "artifacts directory {} does not exist",
                dir.display()
            )));
        }

        let mut artifacts = Vec::new();

        for chain in L2Chain::ALL {
            for network in Network::ALL {
                let path = dir
                    .join(chain.as_str())
                    .join(network.as_str())
                    .join(REDEEMER_ARTIFACT);

                if !path.is_file() {
                    continue;
                }

                let json = std::fs::read_to_string(&path).map_err(|e| {
                    Error::Artifact(format!("failed to read {}: {}", path.display(), e))
                })?;
                artifacts.push(DeploymentArtifact::from_json(chain, network, &json)?);
            }
        }

        tracing::debug!(
            dir = %dir.display(),
            count = artifacts.len(),
            "Loaded redeemer deployment artifacts"
        );

        Ok(Self::from_artifacts(artifacts))
    }

    /// Resolve the deployment for a (chain, network) pair
    pub fn resolve(&self, chain: L2Chain, network: Network) -> Result<&DeploymentArtifact> {
        self.artifacts
            .get(&(chain, network))
            .ok_or_else(|| Error::unsupported(chain, network))
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
