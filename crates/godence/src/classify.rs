//! Kind predicates used by the decoder.

use crate::model::{Kind, Value};

/// Returns true for Address and Path values.
///
/// These decode into text through their canonical rendering rather than
/// their raw payload.
pub fn is_address_or_path(value: &Value) -> bool {
    kind_is_address_or_path(value.kind())
}

/// Kind-level form of [`is_address_or_path`].
///
/// Every kind is listed; a new kind must be classified here explicitly.
pub fn kind_is_address_or_path(kind: Kind) -> bool {
    match kind {
        Kind::Address | Kind::Path => true,
        Kind::Int
        | Kind::Int8
        | Kind::Int16
        | Kind::Int32
        | Kind::Int64
        | Kind::Int128
        | Kind::Int256
        | Kind::UInt
        | Kind::UInt8
        | Kind::UInt16
        | Kind::UInt32
        | Kind::UInt64
        | Kind::UInt128
        | Kind::UInt256
        | Kind::Fix64
        | Kind::UFix64
        | Kind::String
        | Kind::Bool
        | Kind::Character
        | Kind::Array
        | Kind::Dictionary
        | Kind::Optional
        | Kind::Struct
        | Kind::Event
        | Kind::Resource => false,
    }
}
