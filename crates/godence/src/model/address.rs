//! Account addresses.

use std::fmt;

use crate::error::ValueError;

/// An 8-byte Flow account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(pub [u8; 8]);

impl Address {
    /// Width of an address in bytes.
    pub const LENGTH: usize = 8;

    /// Builds an address from raw bytes.
    ///
    /// Shorter input is right-aligned (left-padded with zeros); longer input
    /// keeps its trailing 8 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut out = [0u8; Self::LENGTH];
        if bytes.len() >= Self::LENGTH {
            out.copy_from_slice(&bytes[bytes.len() - Self::LENGTH..]);
        } else {
            out[Self::LENGTH - bytes.len()..].copy_from_slice(bytes);
        }
        Address(out)
    }

    /// Parses hex text, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, ValueError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|source| ValueError::MalformedAddress {
            input: s.to_string(),
            source,
        })?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Returns `0x` followed by 16 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 8]> for Address {
    fn from(bytes: [u8; 8]) -> Self {
        Address(bytes)
    }
}

impl From<Address> for [u8; 8] {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
