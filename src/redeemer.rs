//! Bitcoin Redemption Requests
//!
//! Assembles the parameters an L2 redeemer contract expects for a Bitcoin
//! redemption and submits them through a [`RedeemerContract`].
//!
//! ## Request Shape
//!
//! ```text
//! requestRedemption(
//!     walletPubKeyHash: bytes20,              // hash160(wallet public key)
//!     mainUtxo: (bytes32, uint32, uint64),    // tx hash in internal order
//!     encodedVm: bytes                        // opaque verified message
//! )
//! ```

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use crate::bytes::Hex;
use crate::deployment::{DeploymentArtifact, DeploymentRegistry, L2Chain, Network};
use crate::error::{Error, Result};
use crate::hash::hash160;
use crate::utxo::{MainUtxoParam, UtxoReference};

/// Parameters for one `requestRedemption` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionRequestParams {
    pub wallet_public_key_hash: [u8; 20],
    pub main_utxo: MainUtxoParam,
    /// Cross-chain verified message, passed through uninterpreted
    pub encoded_verified_message: Hex,
}

/// Derive the contract parameters for a redemption.
///
/// Hashes the wallet public key and reverses the main UTXO hash into
/// Bitcoin internal order. `main_utxo` is not modified.
pub fn build_request_params(
    wallet_public_key: &Hex,
    main_utxo: &UtxoReference,
    encoded_verified_message: &Hex,
) -> Result<RedemptionRequestParams> {
    Ok(RedemptionRequestParams {
        wallet_public_key_hash: hash160(wallet_public_key.as_bytes()),
        main_utxo: main_utxo.to_main_utxo_param()?,
        encoded_verified_message: encoded_verified_message.clone(),
    })
}

/// On-chain redeemer boundary.
///
/// Implementations perform exactly one state-changing call per
/// `submit_redemption` and return the transaction hash.
#[async_trait]
pub trait RedeemerContract: Send + Sync {
    async fn submit_redemption(&self, params: &RedemptionRequestParams) -> eyre::Result<Hex>;
}

#[async_trait]
impl<T: RedeemerContract + ?Sized> RedeemerContract for std::sync::Arc<T> {
    async fn submit_redemption(&self, params: &RedemptionRequestParams) -> eyre::Result<Hex> {
        (**self).submit_redemption(params).await
    }
}

/// Redemption request builder bound to one (chain, network) deployment
#[derive(Debug)]
pub struct BitcoinRedeemer<C> {
    chain: L2Chain,
    network: Network,
    artifact: DeploymentArtifact,
    contract: C,
}

impl<C: RedeemerContract> BitcoinRedeemer<C> {
    /// Resolve the deployment for `(chain, network)` and bind a contract to it.
    ///
    /// Fails with [`Error::UnsupportedConfiguration`] before `bind` is called
    /// when the registry has no artifact for the pair.
    pub fn new<F>(
        chain: L2Chain,
        network: Network,
        registry: &DeploymentRegistry,
        bind: F,
    ) -> Result<Self>
    where
        F: FnOnce(&DeploymentArtifact) -> Result<C>,
    {
        let artifact = registry.resolve(chain, network)?.clone();
        let contract = bind(&artifact)?;

        info!(
            chain = %chain,
            network = %network,
            redeemer = %artifact.address,
            "Bound Bitcoin redeemer"
        );

        Ok(Self {
            chain,
            network,
            artifact,
            contract,
        })
    }

    pub fn chain(&self) -> L2Chain {
        self.chain
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn artifact(&self) -> &DeploymentArtifact {
        &self.artifact
    }

    pub fn contract(&self) -> &C {
        &self.contract
    }

    /// Request a Bitcoin redemption.
    ///
    /// Returns the transaction hash reported by the contract. Boundary
    /// failures surface as [`Error::Submission`]; nothing is retried.
    pub async fn request_redemption(
        &self,
        wallet_public_key: &Hex,
        main_utxo: &UtxoReference,
        encoded_verified_message: &Hex,
    ) -> Result<Hex> {
        let params = build_request_params(wallet_public_key, main_utxo, encoded_verified_message)?;

        debug!(
            wallet_pubkey_hash = %hex::encode(params.wallet_public_key_hash),
            main_utxo_tx_hash = %hex::encode(params.main_utxo.tx_hash),
            main_utxo_index = params.main_utxo.tx_output_index,
            main_utxo_value = params.main_utxo.tx_output_value,
            message_len = params.encoded_verified_message.len(),
            "Submitting requestRedemption"
        );

        let tx_hash = self
            .contract
            .submit_redemption(&params)
            .await
            .map_err(Error::Submission)?;

        info!(
            chain = %self.chain,
            network = %self.network,
            tx_hash = %tx_hash.to_prefixed_string(),
            "Redemption requested"
        );

        Ok(tx_hash)
    }
}
