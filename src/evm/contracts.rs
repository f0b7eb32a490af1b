//! L2 redeemer contract ABI
//!
//! Uses alloy's sol! macro to generate type-safe bindings.

use alloy::sol;

sol! {
    /// Bitcoin redeemer deployed on EVM L2 chains
    #[sol(rpc)]
    contract L2BitcoinRedeemer {
        /// Main UTXO of a wallet; txHash is in Bitcoin internal byte order
        struct UTXO {
            bytes32 txHash;
            uint32 txOutputIndex;
            uint64 txOutputValue;
        }

        /// Request redemption of tBTC received through a verified cross-chain message
        function requestRedemption(
            bytes20 walletPubKeyHash,
            UTXO calldata mainUtxo,
            bytes calldata encodedVm
        ) external;
    }
}
