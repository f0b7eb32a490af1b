//! EVM redeemer contract client
//!
//! Sends `requestRedemption` through a wallet-backed alloy provider and
//! waits for the receipt.

use alloy::{
    network::EthereumWallet,
    primitives::{Address, Bytes, FixedBytes},
    providers::ProviderBuilder,
    signers::local::PrivateKeySigner,
};
use async_trait::async_trait;
use eyre::{eyre, Result};
use tracing::{debug, info};

use super::contracts::L2BitcoinRedeemer;
use crate::bytes::Hex;
use crate::config::RedeemerConfig;
use crate::deployment::{DeploymentArtifact, DeploymentRegistry};
use crate::redeemer::{BitcoinRedeemer, RedeemerContract, RedemptionRequestParams};

/// Convert request params into the ABI argument tuple
pub(crate) fn to_call_args(
    params: &RedemptionRequestParams,
) -> (FixedBytes<20>, L2BitcoinRedeemer::UTXO, Bytes) {
    let main_utxo = L2BitcoinRedeemer::UTXO {
        txHash: FixedBytes::from(params.main_utxo.tx_hash),
        txOutputIndex: params.main_utxo.tx_output_index,
        txOutputValue: params.main_utxo.tx_output_value,
    };

    (
        FixedBytes::from(params.wallet_public_key_hash),
        main_utxo,
        Bytes::copy_from_slice(params.encoded_verified_message.as_bytes()),
    )
}

/// `L2BitcoinRedeemer` deployment reached over JSON-RPC
pub struct EvmRedeemerContract {
    rpc_url: url::Url,
    redeemer_address: Address,
    signer: PrivateKeySigner,
}

impl EvmRedeemerContract {
    pub fn new(rpc_url: &str, private_key: &str, artifact: &DeploymentArtifact) -> Result<Self> {
        let signer: PrivateKeySigner = private_key
            .parse()
            .map_err(|e| eyre!("Invalid private key: {}", e))?;

        let rpc_url: url::Url = rpc_url
            .parse()
            .map_err(|e| eyre!("Invalid RPC URL: {}", e))?;

        let redeemer_address = Address::from(*artifact.address.as_bytes());

        info!(
            rpc_url = %rpc_url,
            redeemer = %redeemer_address,
            signer = %signer.address(),
            "Created EVM redeemer client"
        );

        Ok(Self {
            rpc_url,
            redeemer_address,
            signer,
        })
    }

    pub fn redeemer_address(&self) -> Address {
        self.redeemer_address
    }

    pub fn signer_address(&self) -> Address {
        self.signer.address()
    }
}

#[async_trait]
impl RedeemerContract for EvmRedeemerContract {
    async fn submit_redemption(&self, params: &RedemptionRequestParams) -> Result<Hex> {
        let wallet = EthereumWallet::from(self.signer.clone());
        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(wallet)
            .on_http(self.rpc_url.clone());

        let contract = L2BitcoinRedeemer::new(self.redeemer_address, &provider);
        let (wallet_pub_key_hash, main_utxo, encoded_vm) = to_call_args(params);

        let pending_tx = contract
            .requestRedemption(wallet_pub_key_hash, main_utxo, encoded_vm)
            .send()
            .await
            .map_err(|e| eyre!("Failed to send transaction: {}", e))?;

        let tx_hash = *pending_tx.tx_hash();
        debug!(tx_hash = %tx_hash, "requestRedemption sent, waiting for receipt");

        let receipt = pending_tx
            .get_receipt()
            .await
            .map_err(|e| eyre!("Failed to get receipt: {}", e))?;

        if !receipt.status() {
            return Err(eyre!("Transaction reverted: {}", tx_hash));
        }

        Ok(Hex::from(receipt.transaction_hash.0))
    }
}

impl BitcoinRedeemer<EvmRedeemerContract> {
    /// Resolve the configured deployment and bind a signing EVM client to it
    pub fn connect(
        config: &RedeemerConfig,
        registry: &DeploymentRegistry,
    ) -> crate::error::Result<Self> {
        BitcoinRedeemer::new(config.chain, config.network, registry, |artifact| {
            EvmRedeemerContract::new(&config.rpc_url, config.private_key.expose(), artifact)
                .map_err(|e| crate::error::Error::Configuration(e.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deployment::{L2Chain, Network};
    use crate::redact::Redacted;
    use crate::utxo::MainUtxoParam;

    const ANVIL_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_call_args_layout() {
        let params = RedemptionRequestParams {
            wallet_public_key_hash: [0x11; 20],
            main_utxo: MainUtxoParam {
                tx_hash: [0x22; 32],
                tx_output_index: 7,
                tx_output_value: 100_000,
            },
            encoded_verified_message: Hex::from_bytes(vec![0xde, 0xad]),
        };

        let (pkh, utxo, vm) = to_call_args(&params);
        assert_eq!(pkh.0, [0x11; 20]);
        assert_eq!(utxo.txHash.0, [0x22; 32]);
        assert_eq!(utxo.txOutputIndex, 7);
        assert_eq!(utxo.txOutputValue, 100_000);
        assert_eq!(vm.to_vec(), vec![0xde, 0xad]);
    }

    #[test]
    fn test_connect_binds_bundled_deployment() {
        let config = RedeemerConfig {
            chain: L2Chain::Arbitrum,
            network: Network::Local,
            rpc_url: "http://localhost:8545".to_string(),
            private_key: Redacted::new(ANVIL_KEY.to_string()),
            artifacts_dir: None,
        };
        let registry = DeploymentRegistry::bundled().unwrap();

        let redeemer = BitcoinRedeemer::connect(&config, &registry).unwrap();
        assert_eq!(
            redeemer.contract().signer_address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
        assert_eq!(
            redeemer.contract().redeemer_address().to_string().to_lowercase(),
            "0x5fbdb2315678afecb367f032d93f642f64180aa3"
        );
    }

    #[test]
    fn test_connect_rejects_unknown_deployment() {
        let config = RedeemerConfig {
            chain: L2Chain::Base,
            network: Network::Mainnet,
            rpc_url: "https://mainnet.base.org".to_string(),
            private_key: Redacted::new(ANVIL_KEY.to_string()),
            artifacts_dir: None,
        };
        let registry = DeploymentRegistry::bundled().unwrap();

        let result = BitcoinRedeemer::connect(&config, &registry);
        assert!(matches!(
            result,
            Err(crate::error::Error::UnsupportedConfiguration { .. })
        ));
    }
}
