//! Kinds of Cadence values.

use std::fmt;

/// The Cadence type family of a [`Value`](crate::model::Value).
///
/// One kind per value variant; used for dispatch diagnostics and by the
/// JSON-Cadence codec as the `"type"` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Int256,
    UInt,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    UInt128,
    UInt256,
    Fix64,
    UFix64,
    String,
    Bool,
    Address,
    Path,
    Character,
    Array,
    Dictionary,
    Optional,
    Struct,
    Event,
    Resource,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 27] = [
        Kind::Int,
        Kind::Int8,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::Int128,
        Kind::Int256,
        Kind::UInt,
        Kind::UInt8,
        Kind::UInt16,
        Kind::UInt32,
        Kind::UInt64,
        Kind::UInt128,
        Kind::UInt256,
        Kind::Fix64,
        Kind::UFix64,
        Kind::String,
        Kind::Bool,
        Kind::Address,
        Kind::Path,
        Kind::Character,
        Kind::Array,
        Kind::Dictionary,
        Kind::Optional,
        Kind::Struct,
        Kind::Event,
        Kind::Resource,
    ];

    /// Returns the Cadence name of this kind (e.g. `"UInt64"`).
    pub fn name(self) -> &'static str {
        match self {
            Kind::Int => "Int",
            Kind::Int8 => "Int8",
            Kind::Int16 => "Int16",
            Kind::Int32 => "Int32",
            Kind::Int64 => "Int64",
            Kind::Int128 => "Int128",
            Kind::Int256 => "Int256",
            Kind::UInt => "UInt",
            Kind::UInt8 => "UInt8",
            Kind::UInt16 => "UInt16",
            Kind::UInt32 => "UInt32",
            Kind::UInt64 => "UInt64",
            Kind::UInt128 => "UInt128",
            Kind::UInt256 => "UInt256",
            Kind::Fix64 => "Fix64",
            Kind::UFix64 => "UFix64",
            Kind::String => "String",
            Kind::Bool => "Bool",
            Kind::Address => "Address",
            Kind::Path => "Path",
            Kind::Character => "Character",
            Kind::Array => "Array",
            Kind::Dictionary => "Dictionary",
            Kind::Optional => "Optional",
            Kind::Struct => "Struct",
            Kind::Event => "Event",
            Kind::Resource => "Resource",
        }
    }

    /// Looks up a kind by its Cadence name.
    pub fn from_name(name: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Returns true for the arbitrary-precision and 128/256-bit integers.
    pub fn is_big_integer(self) -> bool {
        matches!(
            self,
            Kind::Int | Kind::Int128 | Kind::Int256 | Kind::UInt | Kind::UInt128 | Kind::UInt256
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup_roundtrip() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(Kind::from_name("Word8"), None);
        assert_eq!(Kind::from_name("int8"), None);
    }

    #[test]
    fn test_big_integer_kinds() {
        let big: Vec<Kind> = Kind::ALL.into_iter().filter(|k| k.is_big_integer()).collect();
        assert_eq!(
            big,
            vec![Kind::Int, Kind::Int128, Kind::Int256, Kind::UInt, Kind::UInt128, Kind::UInt256]
        );
    }
}
