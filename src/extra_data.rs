//! Deposit Owner Extra Data
//!
//! Bridge deposit scripts carry a fixed 32-byte "extra data" field naming
//! the owner of the funds on the destination chain. This module maps
//! chain-native addresses into that field and back.
//!
//! ## Layout
//!
//! ```text
//! 32-byte families (Sui, Solana): | raw address (32) |
//! EVM:                            | zero (12) | raw address (20) |
//! ```
//!
//! The field is never length-prefixed; anything other than 32 bytes is
//! rejected at decode time rather than truncated or padded.

use std::fmt;

use crate::address::{Address, ChainFamily};
use crate::bytes::Hex;
use crate::error::{Error, Result};

/// Width of the extra-data field in bytes
pub const EXTRA_DATA_LEN: usize = 32;

/// Exactly 32 raw bytes of deposit extra data
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtraData([u8; EXTRA_DATA_LEN]);

impl ExtraData {
    pub fn from_bytes(bytes: [u8; EXTRA_DATA_LEN]) -> Self {
        ExtraData(bytes)
    }

    /// Parse from slice (must be exactly 32 bytes)
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != EXTRA_DATA_LEN {
            return Err(Error::Format(format!(
                "extra data must be {} bytes, got {}",
                EXTRA_DATA_LEN,
                bytes.len()
            )));
        }
        let mut arr = [0u8; EXTRA_DATA_LEN];
        arr.copy_from_slice(bytes);
        Ok(ExtraData(arr))
    }

    /// Parse from hex text, prefix optional
    pub fn from_hex(text: &str) -> Result<Self> {
        let value: Hex = text.parse()?;
        Self::from_slice(value.as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; EXTRA_DATA_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> Hex {
        Hex::from(self.0)
    }
}

impl fmt::Debug for ExtraData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExtraData(0x{})", hex::encode(self.0))
    }
}

impl From<ExtraData> for Hex {
    fn from(extra: ExtraData) -> Self {
        extra.to_hex()
    }
}

/// Bidirectional mapping between one chain family's addresses and the
/// 32-byte extra-data field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraDataEncoder {
    family: ChainFamily,
}

impl ExtraDataEncoder {
    pub fn new(family: ChainFamily) -> Self {
        Self { family }
    }

    pub fn family(&self) -> ChainFamily {
        self.family
    }

    /// Encode a deposit owner into extra data.
    ///
    /// Addresses of another family are rejected.
    pub fn encode_deposit_owner(&self, owner: &Address) -> Result<ExtraData> {
        if owner.family() != self.family {
            return Err(Error::invalid_address(
                self.family,
                format!("cannot encode a {} address", owner.family()),
            ));
        }

        let mut field = [0u8; EXTRA_DATA_LEN];
        match owner {
            Address::Sui(addr) => field.copy_from_slice(addr.as_bytes()),
            Address::Solana(addr) => field.copy_from_slice(addr.as_bytes()),
            Address::Evm(addr) => field[12..].copy_from_slice(addr.as_bytes()),
        }
        Ok(ExtraData(field))
    }

    /// Decode extra data back into a deposit owner of this encoder's family
    pub fn decode_deposit_owner(&self, extra_data: &Hex) -> Result<Address> {
        let bytes = extra_data.as_bytes();

        if bytes.len() != EXTRA_DATA_LEN {
            return Err(Error::invalid_address(
                self.family,
                format!(
                    "extra data must be {} bytes, got {}",
                    EXTRA_DATA_LEN,
                    bytes.len()
                ),
            ));
        }

        match self.family {
            ChainFamily::Sui | ChainFamily::Solana => Address::from_raw(self.family, bytes),
            ChainFamily::Evm => {
                if bytes[..12].iter().any(|&b| b != 0) {
                    return Err(Error::invalid_address(
                        self.family,
                        "extra data has non-zero padding: expected 12 leading zero bytes",
                    ));
                }
                Address::from_raw(self.family, &bytes[12..])
            }
        }
    }
}
