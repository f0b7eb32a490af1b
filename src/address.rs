//! Chain-Native Deposit Owner Addresses
//!
//! Deposit owners live on chains with different address encodings. Each
//! supported chain family gets its own validated address type, and
//! [`Address`] is the tagged union over them.
//!
//! ## Families
//!
//! | Family | Width | Text form |
//! |--------|-------|-----------|
//! | EVM    | 20    | `0x` + 40 hex chars |
//! | Sui    | 32    | `0x` + 64 hex chars |
//! | Solana | 32    | base58 |
//!
//! Canonical hex is always lowercase; two addresses are equal iff their
//! canonical bytes are equal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::bytes::strip_hex_prefix;
use crate::error::{Error, Result};
use crate::hash::keccak256;

// ============================================================================
// Chain Families
// ============================================================================

/// Chain family tag, carrying the family's fixed address width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
    Evm,
    Sui,
    Solana,
}

impl ChainFamily {
    /// Raw address width in bytes
    pub const fn address_len(&self) -> usize {
        match self {
            ChainFamily::Evm => 20,
            ChainFamily::Sui | ChainFamily::Solana => 32,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChainFamily::Evm => "EVM",
            ChainFamily::Sui => "Sui",
            ChainFamily::Solana => "Solana",
        }
    }
}

impl fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode exactly `N` bytes of hex, reporting failures against `family`
fn parse_fixed_hex<const N: usize>(family: ChainFamily, text: &str) -> Result<[u8; N]> {
    let digits = strip_hex_prefix(text);

    if digits.len() != N * 2 {
        return Err(Error::invalid_address(
            family,
            format!("expected {} hex chars, got {}", N * 2, digits.len()),
        ));
    }

    let bytes = hex::decode(digits)
        .map_err(|e| Error::invalid_address(family, format!("invalid hex: {}", e)))?;

    let mut result = [0u8; N];
    result.copy_from_slice(&bytes);
    Ok(result)
}

// ============================================================================
// EVM
// ============================================================================

/// EVM address (20 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvmAddress([u8; 20]);

impl EvmAddress {
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        EvmAddress(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase `0x`-prefixed hex
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// EIP-55 mixed-case checksum form
    pub fn to_checksum_string(&self) -> String {
        let lower = hex::encode(self.0);
        let digest = keccak256(lower.as_bytes());

        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = (digest[i / 2] >> (if i % 2 == 0 { 4 } else { 0 })) & 0x0f;
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl FromStr for EvmAddress {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        parse_fixed_hex::<20>(ChainFamily::Evm, text).map(EvmAddress)
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Sui
// ============================================================================

/// Sui account address (32 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuiAddress([u8; 32]);

impl SuiAddress {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        SuiAddress(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for SuiAddress {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        parse_fixed_hex::<32>(ChainFamily::Sui, text).map(SuiAddress)
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Solana
// ============================================================================

/// Solana account address (32-byte ed25519 public key, base58 text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolanaAddress([u8; 32]);

impl SolanaAddress {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        SolanaAddress(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl FromStr for SolanaAddress {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let bytes = bs58::decode(text).into_vec().map_err(|e| {
            Error::invalid_address(ChainFamily::Solana, format!("invalid base58: {}", e))
        })?;

        if bytes.len() != 32 {
            return Err(Error::invalid_address(
                ChainFamily::Solana,
                format!("expected 32 bytes, got {}", bytes.len()),
            ));
        }

        let mut result = [0u8; 32];
        result.copy_from_slice(&bytes);
        Ok(SolanaAddress(result))
    }
}

impl fmt::Display for SolanaAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

// ============================================================================
// Tagged Union
// ============================================================================

/// A deposit owner address on any supported chain family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    Evm(EvmAddress),
    Sui(SuiAddress),
    Solana(SolanaAddress),
}

impl Address {
    /// Parse `text` as an address of the given family
    pub fn parse(family: ChainFamily, text: &str) -> Result<Self> {
        Ok(match family {
            ChainFamily::Evm => Address::Evm(text.parse()?),
            ChainFamily::Sui => Address::Sui(text.parse()?),
            ChainFamily::Solana => Address::Solana(text.parse()?),
        })
    }

    /// Build from raw bytes, which must match the family's width exactly
    pub fn from_raw(family: ChainFamily, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != family.address_len() {
            return Err(Error::invalid_address(
                family,
                format!(
                    "expected {} bytes, got {}",
                    family.address_len(),
                    bytes.len()
                ),
            ));
        }

        Ok(match family {
            ChainFamily::Evm => {
                let mut raw = [0u8; 20];
                raw.copy_from_slice(bytes);
                Address::Evm(EvmAddress(raw))
            }
            ChainFamily::Sui => {
                let mut raw = [0u8; 32];
                raw.copy_from_slice(bytes);
                Address::Sui(SuiAddress(raw))
            }
            ChainFamily::Solana => {
                let mut raw = [0u8; 32];
                raw.copy_from_slice(bytes);
                Address::Solana(SolanaAddress(raw))
            }
        })
    }

    pub fn family(&self) -> ChainFamily {
        match self {
            Address::Evm(_) => ChainFamily::Evm,
            Address::Sui(_) => ChainFamily::Sui,
            Address::Solana(_) => ChainFamily::Solana,
        }
    }

    /// Raw canonical bytes
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Address::Evm(a) => a.as_bytes(),
            Address::Sui(a) => a.as_bytes(),
            Address::Solana(a) => a.as_bytes(),
        }
    }

    /// Canonical lowercase hex of the raw bytes, unprefixed
    pub fn identifier_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Evm(a) => write!(f, "{}", a),
            Address::Sui(a) => write!(f, "{}", a),
            Address::Solana(a) => write!(f, "{}", a),
        }
    }
}

impl From<EvmAddress> for Address {
    fn from(addr: EvmAddress) -> Self {
        Address::Evm(addr)
    }
}

impl From<SuiAddress> for Address {
    fn from(addr: SuiAddress) -> Self {
        Address::Sui(addr)
    }
}

impl From<SolanaAddress> for Address {
    fn from(addr: SolanaAddress) -> Self {
        Address::Solana(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUI_ADDR: &str = "0x3d78316ce8ee3fe48d7ff85cdc2d0df9d459f43d802d96f58f7b59984c2dd3ae";

    #[test]
    fn test_evm_address_parse() {
        let addr: EvmAddress = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse().unwrap();
        assert_eq!(addr.to_hex(), "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");

        let bare: EvmAddress = "f39fd6e51aad88f6f4ce6ab8827279cfffb92266".parse().unwrap();
        assert_eq!(addr, bare);
    }

    #[test]
    fn test_evm_checksum() {
        let addr: EvmAddress = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".parse().unwrap();
        assert_eq!(
            addr.to_checksum_string(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
    }

    #[test]
    fn test_evm_address_rejects_wrong_length() {
        let result = "0xdead".parse::<EvmAddress>();
        assert!(matches!(
            result,
            Err(Error::InvalidAddressFormat {
                family: ChainFamily::Evm,
                ..
            })
        ));
    }

    #[test]
    fn test_sui_address_is_case_insensitive() {
        let lower: SuiAddress = SUI_ADDR.parse().unwrap();
        let upper: SuiAddress = SUI_ADDR.to_uppercase().replace("0X", "0x").parse().unwrap();

        assert_eq!(lower, upper);
        assert_eq!(upper.to_hex(), SUI_ADDR);
    }

    #[test]
    fn test_sui_address_rejects_bad_charset() {
        let bad = format!("0x{}", "z".repeat(64));
        assert!(matches!(
            bad.parse::<SuiAddress>(),
            Err(Error::InvalidAddressFormat {
                family: ChainFamily::Sui,
                ..
            })
        ));
    }

    #[test]
    fn test_sui_address_rejects_short() {
        let short = &SUI_ADDR[..64];
        assert!(short.parse::<SuiAddress>().is_err());
    }

    #[test]
    fn test_padded_text_is_rejected() {
        let padded_sui = format!(" {}\n", SUI_ADDR);
        assert!(matches!(
            padded_sui.parse::<SuiAddress>(),
            Err(Error::InvalidAddressFormat {
                family: ChainFamily::Sui,
                ..
            })
        ));

        let padded_solana = " 11111111111111111111111111111111 ";
        assert!(matches!(
            padded_solana.parse::<SolanaAddress>(),
            Err(Error::InvalidAddressFormat {
                family: ChainFamily::Solana,
                ..
            })
        ));

        let padded_evm = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266 ";
        assert!(padded_evm.parse::<EvmAddress>().is_err());
    }

    #[test]
    fn test_solana_address_roundtrip() {
        // System program id is 32 zero bytes
        let system: SolanaAddress = "11111111111111111111111111111111".parse().unwrap();
        assert_eq!(system.as_bytes(), &[0u8; 32]);
        assert_eq!(system.to_base58(), "11111111111111111111111111111111");
    }

    #[test]
    fn test_solana_address_rejects_wrong_width() {
        // 20 bytes of base58 payload
        let encoded = bs58::encode([7u8; 20]).into_string();
        assert!(matches!(
            encoded.parse::<SolanaAddress>(),
            Err(Error::InvalidAddressFormat {
                family: ChainFamily::Solana,
                ..
            })
        ));

        assert!("0OIl".parse::<SolanaAddress>().is_err());
    }

    #[test]
    fn test_address_family_and_identifier() {
        let addr = Address::parse(ChainFamily::Sui, &SUI_ADDR.to_uppercase()[2..]).unwrap();
        assert_eq!(addr.family(), ChainFamily::Sui);
        assert_eq!(addr.identifier_hex(), &SUI_ADDR[2..]);
        assert_eq!(addr.to_string(), SUI_ADDR);
    }

    #[test]
    fn test_from_raw_enforces_width() {
        assert!(Address::from_raw(ChainFamily::Evm, &[1u8; 20]).is_ok());
        assert!(Address::from_raw(ChainFamily::Evm, &[1u8; 32]).is_err());
        assert!(Address::from_raw(ChainFamily::Solana, &[1u8; 31]).is_err());
    }

    #[test]
    fn test_different_families_are_not_equal() {
        let sui = Address::from_raw(ChainFamily::Sui, &[9u8; 32]).unwrap();
        let sol = Address::from_raw(ChainFamily::Solana, &[9u8; 32]).unwrap();
        assert_ne!(sui, sol);
        assert_eq!(sui.as_bytes(), sol.as_bytes());
    }
}
