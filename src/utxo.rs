//! Main UTXO references and their wire form
//!
//! A wallet's main UTXO is reported by chain queries with the transaction
//! hash in display (RPC) order. The redeemer contract expects the hash in
//! Bitcoin's internal order, so the wire form reverses it.

use serde::{Deserialize, Serialize};

use crate::bytes::Hex;
use crate::error::{Error, Result};

/// Reference to an unspent output, hash in natural (RPC) byte order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoReference {
    pub transaction_hash: Hex,
    pub output_index: u32,
    pub value: u64,
}

impl UtxoReference {
    pub fn new(transaction_hash: Hex, output_index: u32, value: u64) -> Self {
        Self {
            transaction_hash,
            output_index,
            value,
        }
    }

    /// Build the contract parameter, reversing the hash into internal order.
    ///
    /// `self` is left untouched. Fails if the hash is not 32 bytes.
    pub fn to_main_utxo_param(&self) -> Result<MainUtxoParam> {
        if self.transaction_hash.len() != 32 {
            return Err(Error::Format(format!(
                "UTXO transaction hash must be 32 bytes, got {}",
                self.transaction_hash.len()
            )));
        }

        Ok(MainUtxoParam {
            tx_hash: self.transaction_hash.reverse().to_array()?,
            tx_output_index: self.output_index,
            tx_output_value: self.value,
        })
    }
}

/// Main UTXO as passed to the redeemer contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainUtxoParam {
    /// Transaction hash in Bitcoin internal byte order
    pub tx_hash: [u8; 32],
    pub tx_output_index: u32,
    pub tx_output_value: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TX_HASH: &str = "0x5b6d040eb06b3de1a819890d55d251112e55c31db4a3f5eb7cfacf519fad7adb";

    #[test]
    fn test_param_reverses_hash() {
        let utxo = UtxoReference::new(TX_HASH.parse().unwrap(), 1, 1_000_000);
        let param = utxo.to_main_utxo_param().unwrap();

        assert_eq!(
            hex::encode(param.tx_hash),
            "db7aad9f51cffa7cebf5a3b41dc3552e1151d2550d8919a8e13d6bb00e046d5b"
        );
        assert_eq!(param.tx_output_index, 1);
        assert_eq!(param.tx_output_value, 1_000_000);
    }

    #[test]
    fn test_param_leaves_reference_unchanged() {
        let utxo = UtxoReference::new(TX_HASH.parse().unwrap(), 0, 100_000);
        let snapshot = utxo.clone();

        let param = utxo.to_main_utxo_param().unwrap();

        assert_eq!(utxo, snapshot);
        assert_eq!(Hex::from(param.tx_hash).reverse(), utxo.transaction_hash);
    }

    #[test]
    fn test_param_rejects_short_hash() {
        let utxo = UtxoReference::new(Hex::from([0u8; 31]), 0, 0);
        assert!(matches!(utxo.to_main_utxo_param(), Err(Error::Format(_))));
    }

    #[test]
    fn test_reference_json_shape() {
        let utxo = UtxoReference::new(TX_HASH.parse().unwrap(), 2, 42);
        let json = serde_json::to_value(&utxo).unwrap();

        assert_eq!(json["transactionHash"], TX_HASH);
        assert_eq!(json["outputIndex"], 2);
        assert_eq!(json["value"], 42);
    }
}
