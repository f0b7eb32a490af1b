//! Immutable hex-backed byte sequences
//!
//! [`Hex`] is the value type used at every wire boundary in this crate:
//! transaction hashes, public keys, verified messages and extra data all
//! travel as `Hex`. Text form is always lowercase, with or without a `0x`
//! prefix.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Ordered bytes of known length.
///
/// Derived transforms such as [`Hex::reverse`] return new values; nothing
/// mutates a `Hex` after construction.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Hex(Vec<u8>);

impl Hex {
    /// Wrap raw bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Hex(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unprefixed lowercase hex
    pub fn to_unprefixed_string(&self) -> String {
        hex::encode(&self.0)
    }

    /// `0x`-prefixed lowercase hex
    pub fn to_prefixed_string(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }

    /// New sequence with the byte order inverted.
    ///
    /// Converts between the display (RPC) order of Bitcoin hashes and the
    /// internal order used in serialized transactions.
    pub fn reverse(&self) -> Hex {
        let mut reversed = self.0.clone();
        reversed.reverse();
        Hex(reversed)
    }

    /// Copy into a fixed-size array, failing if the length differs
    pub fn to_array<const N: usize>(&self) -> Result<[u8; N]> {
        if self.0.len() != N {
            return Err(Error::Format(format!(
                "expected {} bytes, got {}",
                N,
                self.0.len()
            )));
        }
        let mut result = [0u8; N];
        result.copy_from_slice(&self.0);
        Ok(result)
    }
}

/// Strip an optional `0x`/`0X` prefix
pub(crate) fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let digits = strip_hex_prefix(text);

        if digits.len() % 2 != 0 {
            return Err(Error::Format(format!(
                "odd-length hex string ({} chars)",
                digits.len()
            )));
        }

        let bytes =
            hex::decode(digits).map_err(|e| Error::Format(format!("invalid hex: {}", e)))?;
        Ok(Hex(bytes))
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_unprefixed_string())
    }
}

impl fmt::Debug for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hex({})", self.to_prefixed_string())
    }
}

impl AsRef<[u8]> for Hex {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Hex {
    fn from(bytes: Vec<u8>) -> Self {
        Hex(bytes)
    }
}

impl From<&[u8]> for Hex {
    fn from(bytes: &[u8]) -> Self {
        Hex(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Hex {
    fn from(bytes: [u8; N]) -> Self {
        Hex(bytes.to_vec())
    }
}

impl Serialize for Hex {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_prefixed_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse::<Hex>().map_err(serde::de::Error::custom)
    }
}
