//! Native marker types.
//!
//! A plain `u64` encodes as `UInt64` and a plain `String` as `String`.
//! Wrapping them in one of these types selects a different Cadence kind:
//!
//! | Marker         | Cadence kind |
//! |----------------|--------------|
//! | [`Fix64`]      | `Fix64`      |
//! | [`UFix64`]     | `UFix64`     |
//! | [`HexAddress`] | `Address`    |
//! | [`PathString`] | `Path`       |
//! | [`Character`]  | `Character`  |

/// Whole number encoded as Fix64.
///
/// Only whole values pass through this marker: `Fix64(127)` becomes the
/// Cadence value `127.00000000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Fix64(pub i64);

/// Whole number encoded as UFix64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UFix64(pub u64);

/// Hex text (optionally `0x`-prefixed) encoded as an Address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct HexAddress(pub String);

/// `/domain/identifier` text encoded as a Path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PathString(pub String);

/// Single-grapheme text encoded as a Character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Character(pub String);

impl From<&str> for HexAddress {
    fn from(s: &str) -> Self {
        HexAddress(s.to_string())
    }
}

impl From<&str> for PathString {
    fn from(s: &str) -> Self {
        PathString(s.to_string())
    }
}

impl From<&str> for Character {
    fn from(s: &str) -> Self {
        Character(s.to_string())
    }
}
