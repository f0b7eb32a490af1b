//! Hash primitives for wallet identities and EVM checksums
//!
//! Bitcoin wallets are identified on-chain by the hash160 of their
//! compressed public key:
//!
//! ```text
//! hash160(pubkey) = RIPEMD160(SHA256(pubkey))
//! ```
//!
//! Keccak-256 is kept for EIP-55 checksummed EVM addresses.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};

use crate::bytes::Hex;

/// Compute SHA-256 of data
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let digest = Sha256::digest(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&digest);
    output
}

/// Compute double SHA-256 (Bitcoin's hash256)
pub fn hash256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute RIPEMD160(SHA256(data)), always 20 bytes
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let digest = Ripemd160::digest(sha256(data));
    let mut output = [0u8; 20];
    output.copy_from_slice(&digest);
    output
}

/// hash160 over a [`Hex`] value, returned as `Hex`.
///
/// Public key format is not validated here.
pub fn compute_hash160(data: &Hex) -> Hex {
    Hex::from(hash160(data.as_bytes()))
}

/// Compute keccak256 hash of data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}
