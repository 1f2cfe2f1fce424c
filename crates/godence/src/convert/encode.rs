//! Native to Cadence conversion.
//!
//! Dispatch is by native type:
//! - Fixed-width integers and `bool` map to exactly one Cadence kind
//! - `BigInt`/`BigUint` take the smallest of Int128, UInt128, Int256, UInt256
//! - Marker types ([`crate::native`]) select Fix64, UFix64, Address, Path
//!   and Character
//! - Sequences become arrays, maps become dictionaries
//!
//! Floating-point values are never encoded.

use std::collections::{BTreeMap, HashMap, VecDeque};

use num_bigint::{BigInt, BigUint};
use tracing::trace;

use crate::error::{EncodeError, ValueError};
use crate::model::{Address, Path, Value};
use crate::native;
use crate::util::{parse_fix64, parse_ufix64};

/// A native value that converts into a Cadence value.
pub trait Encode {
    /// Converts this value; never partially succeeds.
    fn to_cadence(&self) -> Result<Value, EncodeError>;
}

/// Converts a native value into a Cadence value.
pub fn encode<T: Encode + ?Sized>(value: &T) -> Result<Value, EncodeError> {
    value.to_cadence()
}

/// Converts a native value into a present Cadence optional.
pub fn encode_optional<T: Encode + ?Sized>(value: &T) -> Result<Value, EncodeError> {
    Ok(Value::some(value.to_cadence()?))
}

/// Picks the smallest 128/256-bit Cadence integer that holds `n`.
fn big_int_to_cadence(n: &BigInt) -> Result<Value, EncodeError> {
    let value = Value::int128_from_big(n)
        .or_else(|| Value::uint128_from_big(n))
        .or_else(|| Value::int256_from_big(n))
        .or_else(|| Value::uint256_from_big(n))
        .ok_or_else(|| EncodeError::UnsupportedValue {
            type_name: "BigInt",
            value: n.to_str_radix(10),
        })?;
    trace!(value = %n, kind = %value.kind(), "selected big integer width");
    Ok(value)
}

macro_rules! impl_encode_exact {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn to_cadence(&self) -> Result<Value, EncodeError> {
                    Ok(Value::$variant(*self))
                }
            }
        )*
    };
}

impl_encode_exact!(
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    bool => Bool,
    Address => Address,
);

impl Encode for isize {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        Ok(Value::Int(BigInt::from(*self)))
    }
}

impl Encode for usize {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        Ok(Value::UInt(BigInt::from(*self)))
    }
}

impl Encode for i128 {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        Ok(Value::Int128(BigInt::from(*self)))
    }
}

impl Encode for u128 {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        Ok(Value::UInt128(BigInt::from(*self)))
    }
}

impl Encode for BigInt {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        big_int_to_cadence(self)
    }
}

impl Encode for BigUint {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        big_int_to_cadence(&BigInt::from(self.clone()))
    }
}

impl Encode for f32 {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        Err(EncodeError::UnsupportedType { type_name: "f32" })
    }
}

impl Encode for f64 {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        Err(EncodeError::UnsupportedType { type_name: "f64" })
    }
}

impl Encode for str {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        Ok(Value::String(self.to_string()))
    }
}

impl Encode for String {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        Ok(Value::String(self.clone()))
    }
}

impl Encode for char {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        Ok(Value::Character(self.to_string()))
    }
}

impl Encode for Path {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        Ok(Value::Path(self.clone()))
    }
}

impl Encode for Value {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        Ok(self.clone())
    }
}

// =============================================================================
// MARKER TYPES
// =============================================================================

impl Encode for native::Fix64 {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        let raw = parse_fix64(&format!("{}.0", self.0)).map_err(ValueError::from)?;
        Ok(Value::Fix64(raw))
    }
}

impl Encode for native::UFix64 {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        let raw = parse_ufix64(&format!("{}.0", self.0)).map_err(ValueError::from)?;
        Ok(Value::UFix64(raw))
    }
}

impl Encode for native::HexAddress {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        Ok(Value::Address(Address::from_hex(&self.0)?))
    }
}

impl Encode for native::PathString {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        Ok(Value::Path(Path::parse(&self.0)?))
    }
}

impl Encode for native::Character {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        Ok(Value::character(self.0.as_str())?)
    }
}

// =============================================================================
// CONTAINERS
// =============================================================================

fn sequence_to_cadence<'a, T, I>(items: I) -> Result<Value, EncodeError>
where
    T: Encode + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let items = items
        .into_iter()
        .map(Encode::to_cadence)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Array(items))
}

fn mapping_to_cadence<'a, K, V, I>(entries: I) -> Result<Value, EncodeError>
where
    K: Encode + 'a,
    V: Encode + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let pairs = entries
        .into_iter()
        .map(|(k, v)| -> Result<(Value, Value), EncodeError> {
            Ok((k.to_cadence()?, v.to_cadence()?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Dictionary(pairs))
}

impl<T: Encode> Encode for [T] {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        sequence_to_cadence(self)
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        sequence_to_cadence(self)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        sequence_to_cadence(self)
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        sequence_to_cadence(self)
    }
}

impl<K: Encode, V: Encode, S> Encode for HashMap<K, V, S> {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        mapping_to_cadence(self)
    }
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        mapping_to_cadence(self)
    }
}

impl<T: Encode> Encode for Option<T> {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        match self {
            Some(inner) => encode_optional(inner),
            None => Ok(Value::none()),
        }
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        (**self).to_cadence()
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn to_cadence(&self) -> Result<Value, EncodeError> {
        (**self).to_cadence()
    }
}
