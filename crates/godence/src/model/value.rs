//! The Cadence value model.
//!
//! Values are the arguments accepted by scripts and transactions, and the
//! results, struct instances and events they produce.

use lazy_static::lazy_static;
use num_bigint::{BigInt, Sign};

use crate::error::ValueError;
use crate::model::{Address, Kind, Path};
use crate::util::is_single_grapheme;

lazy_static! {
    static ref INT128_MIN: BigInt = BigInt::from(i128::MIN);
    static ref INT128_MAX: BigInt = BigInt::from(i128::MAX);
    static ref UINT128_MAX: BigInt = BigInt::from(u128::MAX);
    static ref INT256_MIN: BigInt = -(BigInt::from(1u8) << 255usize);
    static ref INT256_MAX: BigInt = (BigInt::from(1u8) << 255usize) - BigInt::from(1u8);
    static ref UINT256_MAX: BigInt = (BigInt::from(1u8) << 256usize) - BigInt::from(1u8);
}

fn in_range(n: &BigInt, min: &BigInt, max: &BigInt) -> bool {
    n >= min && n <= max
}

fn is_non_negative(n: &BigInt) -> bool {
    n.sign() != Sign::Minus
}

/// A named field of a [`Composite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

/// A struct, event or resource instance: a type ID plus ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    /// Fully-qualified type ID, e.g. `A.f8d6e0586b0a20c7.ForTest.Simple`.
    pub type_id: String,
    pub fields: Vec<Field>,
}

impl Composite {
    /// Creates a composite with no fields.
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    pub fn field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value,
        });
        self
    }

    /// Returns the first field with exactly this name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }
}

/// A Cadence value.
///
/// The 128/256-bit and arbitrary-precision integers share a `BigInt`
/// payload; build them through the range-checked constructors
/// ([`Value::int128_from_big`] and friends) or check with
/// [`Value::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Arbitrary-precision signed integer.
    Int(BigInt),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Int128(BigInt),
    Int256(BigInt),

    /// Arbitrary-precision unsigned integer.
    UInt(BigInt),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    UInt128(BigInt),
    UInt256(BigInt),

    /// Signed fixed-point, raw value scaled by 10^8.
    Fix64(i64),
    /// Unsigned fixed-point, raw value scaled by 10^8.
    UFix64(u64),

    String(String),
    Bool(bool),
    Address(Address),
    Path(Path),
    /// A single grapheme cluster.
    Character(String),

    Array(Vec<Value>),
    /// Key-value pairs in source order.
    Dictionary(Vec<(Value, Value)>),
    /// `None` is the absent optional (`nil`).
    Optional(Option<Box<Value>>),

    Struct(Composite),
    Event(Composite),
    Resource(Composite),
}

impl Value {
    /// Creates a String value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Creates a Character value, rejecting text that is not one grapheme.
    pub fn character(s: impl Into<String>) -> Result<Self, ValueError> {
        let s = s.into();
        if !is_single_grapheme(&s) {
            return Err(ValueError::MalformedCharacter { input: s });
        }
        Ok(Value::Character(s))
    }

    /// Wraps a value in a present optional.
    pub fn some(value: Value) -> Self {
        Value::Optional(Some(Box::new(value)))
    }

    /// The absent optional.
    pub fn none() -> Self {
        Value::Optional(None)
    }

    /// Creates an Int128 if `n` is within range.
    pub fn int128_from_big(n: &BigInt) -> Option<Self> {
        in_range(n, &INT128_MIN, &INT128_MAX).then(|| Value::Int128(n.clone()))
    }

    /// Creates an Int256 if `n` is within range.
    pub fn int256_from_big(n: &BigInt) -> Option<Self> {
        in_range(n, &INT256_MIN, &INT256_MAX).then(|| Value::Int256(n.clone()))
    }

    /// Creates a UInt if `n` is non-negative.
    pub fn uint_from_big(n: &BigInt) -> Option<Self> {
        is_non_negative(n).then(|| Value::UInt(n.clone()))
    }

    /// Creates a UInt128 if `n` is within range.
    pub fn uint128_from_big(n: &BigInt) -> Option<Self> {
        (is_non_negative(n) && n <= &*UINT128_MAX).then(|| Value::UInt128(n.clone()))
    }

    /// Creates a UInt256 if `n` is within range.
    pub fn uint256_from_big(n: &BigInt) -> Option<Self> {
        (is_non_negative(n) && n <= &*UINT256_MAX).then(|| Value::UInt256(n.clone()))
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Int8(_) => Kind::Int8,
            Value::Int16(_) => Kind::Int16,
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
            Value::Int128(_) => Kind::Int128,
            Value::Int256(_) => Kind::Int256,
            Value::UInt(_) => Kind::UInt,
            Value::UInt8(_) => Kind::UInt8,
            Value::UInt16(_) => Kind::UInt16,
            Value::UInt32(_) => Kind::UInt32,
            Value::UInt64(_) => Kind::UInt64,
            Value::UInt128(_) => Kind::UInt128,
            Value::UInt256(_) => Kind::UInt256,
            Value::Fix64(_) => Kind::Fix64,
            Value::UFix64(_) => Kind::UFix64,
            Value::String(_) => Kind::String,
            Value::Bool(_) => Kind::Bool,
            Value::Address(_) => Kind::Address,
            Value::Path(_) => Kind::Path,
            Value::Character(_) => Kind::Character,
            Value::Array(_) => Kind::Array,
            Value::Dictionary(_) => Kind::Dictionary,
            Value::Optional(_) => Kind::Optional,
            Value::Struct(_) => Kind::Struct,
            Value::Event(_) => Kind::Event,
            Value::Resource(_) => Kind::Resource,
        }
    }

    /// Returns the Cadence type ID of this value, e.g. `Int8?` or `[String]`.
    ///
    /// Containers carry no static type, so element types are taken from the
    /// first element; empty or mixed containers report `AnyStruct`.
    pub fn type_id(&self) -> String {
        match self {
            Value::Array(items) => format!("[{}]", common_type_id(items.iter())),
            Value::Dictionary(pairs) => format!(
                "{{{}: {}}}",
                common_type_id(pairs.iter().map(|(k, _)| k)),
                common_type_id(pairs.iter().map(|(_, v)| v)),
            ),
            Value::Optional(Some(inner)) => format!("{}?", inner.type_id()),
            Value::Optional(None) => "Never?".to_string(),
            Value::Struct(c) | Value::Event(c) | Value::Resource(c) => c.type_id.clone(),
            other => other.kind().name().to_string(),
        }
    }

    /// Returns the composite payload of a struct, event or resource.
    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Value::Struct(c) | Value::Event(c) | Value::Resource(c) => Some(c),
            _ => None,
        }
    }

    /// Validates invariants the enum cannot express.
    ///
    /// Returns an error description if invalid, None if valid.
    pub fn validate(&self) -> Option<&'static str> {
        match self {
            Value::Int128(n) if !in_range(n, &INT128_MIN, &INT128_MAX) => {
                Some("Int128 value out of range")
            }
            Value::Int256(n) if !in_range(n, &INT256_MIN, &INT256_MAX) => {
                Some("Int256 value out of range")
            }
            Value::UInt(n) if !is_non_negative(n) => Some("UInt value is negative"),
            Value::UInt128(n) if !is_non_negative(n) || n > &*UINT128_MAX => {
                Some("UInt128 value out of range")
            }
            Value::UInt256(n) if !is_non_negative(n) || n > &*UINT256_MAX => {
                Some("UInt256 value out of range")
            }
            Value::Character(s) if !is_single_grapheme(s) => {
                Some("Character is not a single grapheme cluster")
            }
            Value::Array(items) => items.iter().find_map(Value::validate),
            Value::Dictionary(pairs) => pairs
                .iter()
                .find_map(|(k, v)| k.validate().or_else(|| v.validate())),
            Value::Optional(Some(inner)) => inner.validate(),
            Value::Struct(c) | Value::Event(c) | Value::Resource(c) => {
                c.fields.iter().find_map(|f| f.value.validate())
            }
            _ => None,
        }
    }
}

fn common_type_id<'a>(mut values: impl Iterator<Item = &'a Value>) -> String {
    let Some(first) = values.next() else {
        return "AnyStruct".to_string();
    };
    let id = first.type_id();
    if values.all(|v| v.type_id() == id) {
        id
    } else {
        "AnyStruct".to_string()
    }
}
