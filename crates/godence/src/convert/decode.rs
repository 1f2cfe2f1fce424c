//! Cadence to native conversion.
//!
//! [`decode`] writes a Cadence value into a caller-owned destination.
//! Optionals are unwrapped before dispatch: a present optional decodes its
//! inner value, an absent one leaves the destination untouched.
//!
//! Fixed-width destinations require the exact Cadence width. `i64` also
//! takes the raw Fix64 payload and `u64` the raw UFix64 payload, since those
//! are stored as 64-bit integers.
//!
//! Aggregates stop at the first failing element, field or entry. Elements
//! decoded before the failure stay in the destination.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use num_bigint::{BigInt, BigUint};

use crate::classify::is_address_or_path;
use crate::error::DecodeError;
use crate::limits::FIXED_POINT_FACTOR;
use crate::model::{Address, Path, Value};
use crate::native;

/// A native destination that a Cadence value can be written into.
pub trait Decode {
    /// Writes `value` (never an optional) into `self`.
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError>;
}

/// Decodes a Cadence value into `dest`.
pub fn decode<T: Decode + ?Sized>(value: &Value, dest: &mut T) -> Result<(), DecodeError> {
    match value {
        Value::Optional(None) => Ok(()),
        Value::Optional(Some(inner)) => decode(inner, dest),
        other => dest.decode_from(other),
    }
}

fn unsupported_value<T: ?Sized>(value: &Value, rendered: String) -> DecodeError {
    DecodeError::UnsupportedValue {
        kind: value.kind(),
        value: rendered,
        target: std::any::type_name::<T>(),
    }
}

macro_rules! impl_decode_exact {
    ($($ty:ty => [$($variant:ident),+]),* $(,)?) => {
        $(
            impl Decode for $ty {
                fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
                    match value {
                        $(Value::$variant(v) => {
                            *self = *v;
                            Ok(())
                        })+
                        other => Err(DecodeError::mismatch::<$ty>(other.kind())),
                    }
                }
            }
        )*
    };
}

impl_decode_exact!(
    i8 => [Int8],
    i16 => [Int16],
    i32 => [Int32],
    i64 => [Int64, Fix64],
    u8 => [UInt8],
    u16 => [UInt16],
    u32 => [UInt32],
    u64 => [UInt64, UFix64],
    bool => [Bool],
    Address => [Address],
);

/// Narrows a big integer payload into a primitive destination.
macro_rules! impl_decode_big_exact {
    ($($ty:ty => [$($variant:ident),+]),* $(,)?) => {
        $(
            impl Decode for $ty {
                fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
                    match value {
                        $(Value::$variant(n))|+ => {
                            *self = <$ty>::try_from(n)
                                .map_err(|_| unsupported_value::<$ty>(value, n.to_string()))?;
                            Ok(())
                        }
                        other => Err(DecodeError::mismatch::<$ty>(other.kind())),
                    }
                }
            }
        )*
    };
}

impl_decode_big_exact!(
    i128 => [Int128],
    u128 => [UInt128],
    isize => [Int],
    usize => [UInt],
);

impl Decode for BigInt {
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        match value {
            Value::Int(n)
            | Value::Int128(n)
            | Value::Int256(n)
            | Value::UInt(n)
            | Value::UInt128(n)
            | Value::UInt256(n) => {
                *self = n.clone();
                Ok(())
            }
            other => Err(DecodeError::mismatch::<BigInt>(other.kind())),
        }
    }
}

impl Decode for BigUint {
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        match value {
            Value::UInt(n) | Value::UInt128(n) | Value::UInt256(n) => {
                *self = n
                    .to_biguint()
                    .ok_or_else(|| unsupported_value::<BigUint>(value, n.to_string()))?;
                Ok(())
            }
            other => Err(DecodeError::mismatch::<BigUint>(other.kind())),
        }
    }
}

impl Decode for f32 {
    fn decode_from(&mut self, _value: &Value) -> Result<(), DecodeError> {
        Err(DecodeError::UnsupportedType { type_name: "f32" })
    }
}

impl Decode for f64 {
    fn decode_from(&mut self, _value: &Value) -> Result<(), DecodeError> {
        Err(DecodeError::UnsupportedType { type_name: "f64" })
    }
}

/// Canonical text of an address or path.
fn canonical_text(value: &Value) -> Option<String> {
    match value {
        Value::Address(address) => Some(address.to_hex()),
        Value::Path(path) => Some(path.to_string()),
        _ => None,
    }
}

impl Decode for String {
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        let text = if is_address_or_path(value) {
            canonical_text(value)
        } else {
            match value {
                Value::String(s) | Value::Character(s) => Some(s.clone()),
                _ => None,
            }
        };
        *self = text.ok_or_else(|| DecodeError::mismatch::<String>(value.kind()))?;
        Ok(())
    }
}

impl Decode for char {
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        let Value::Character(s) = value else {
            return Err(DecodeError::mismatch::<char>(value.kind()));
        };
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                *self = c;
                Ok(())
            }
            _ => Err(unsupported_value::<char>(value, s.clone())),
        }
    }
}

impl Decode for [u8; 8] {
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        match value {
            Value::Address(address) => {
                *self = address.0;
                Ok(())
            }
            other => Err(DecodeError::mismatch::<[u8; 8]>(other.kind())),
        }
    }
}

impl Decode for Path {
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        match value {
            Value::Path(path) => {
                *self = path.clone();
                Ok(())
            }
            other => Err(DecodeError::mismatch::<Path>(other.kind())),
        }
    }
}

// =============================================================================
// MARKER TYPES
// =============================================================================

impl Decode for native::Fix64 {
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        let Value::Fix64(raw) = value else {
            return Err(DecodeError::mismatch::<native::Fix64>(value.kind()));
        };
        let factor = FIXED_POINT_FACTOR as i64;
        if raw % factor != 0 {
            return Err(unsupported_value::<native::Fix64>(
                value,
                crate::util::format_fix64(*raw),
            ));
        }
        self.0 = raw / factor;
        Ok(())
    }
}

impl Decode for native::UFix64 {
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        let Value::UFix64(raw) = value else {
            return Err(DecodeError::mismatch::<native::UFix64>(value.kind()));
        };
        if raw % FIXED_POINT_FACTOR != 0 {
            return Err(unsupported_value::<native::UFix64>(
                value,
                crate::util::format_ufix64(*raw),
            ));
        }
        self.0 = raw / FIXED_POINT_FACTOR;
        Ok(())
    }
}

impl Decode for native::HexAddress {
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        match value {
            Value::Address(address) => {
                self.0 = address.to_hex();
                Ok(())
            }
            other => Err(DecodeError::mismatch::<native::HexAddress>(other.kind())),
        }
    }
}

impl Decode for native::PathString {
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        match value {
            Value::Path(path) => {
                self.0 = path.to_string();
                Ok(())
            }
            other => Err(DecodeError::mismatch::<native::PathString>(other.kind())),
        }
    }
}

impl Decode for native::Character {
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        match value {
            Value::Character(s) => {
                self.0 = s.clone();
                Ok(())
            }
            other => Err(DecodeError::mismatch::<native::Character>(other.kind())),
        }
    }
}

// =============================================================================
// CONTAINERS
// =============================================================================

impl<T: Decode + Default> Decode for Vec<T> {
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        let Value::Array(items) = value else {
            return Err(DecodeError::mismatch::<Vec<T>>(value.kind()));
        };
        self.reserve(items.len());
        for item in items {
            let mut slot = T::default();
            decode(item, &mut slot)?;
            self.push(slot);
        }
        Ok(())
    }
}

/// Decodes dictionary entries through `insert`; a repeated key overwrites.
fn decode_entries<K, V>(
    value: &Value,
    target: &'static str,
    mut insert: impl FnMut(K, V),
) -> Result<(), DecodeError>
where
    K: Decode + Default,
    V: Decode + Default,
{
    let Value::Dictionary(pairs) = value else {
        return Err(DecodeError::TypeMismatch {
            target,
            found: value.kind(),
        });
    };
    for (k, v) in pairs {
        let mut key = K::default();
        decode(k, &mut key)?;
        let mut val = V::default();
        decode(v, &mut val)?;
        insert(key, val);
    }
    Ok(())
}

impl<K, V, S> Decode for HashMap<K, V, S>
where
    K: Decode + Default + Eq + Hash,
    V: Decode + Default,
    S: BuildHasher,
{
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        decode_entries(value, std::any::type_name::<Self>(), |k, v| {
            self.insert(k, v);
        })
    }
}

impl<K, V> Decode for BTreeMap<K, V>
where
    K: Decode + Default + Ord,
    V: Decode + Default,
{
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        decode_entries(value, std::any::type_name::<Self>(), |k, v| {
            self.insert(k, v);
        })
    }
}

/// Allocates a fresh `T`, decodes into it, then stores it.
impl<T: Decode + Default> Decode for Option<T> {
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        let mut inner = T::default();
        decode(value, &mut inner)?;
        *self = Some(inner);
        Ok(())
    }
}

impl<T: Decode + ?Sized> Decode for Box<T> {
    fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
        (**self).decode_from(value)
    }
}
