//! Mapping native structs onto Cadence composites.
//!
//! A [`Record`] publishes a table of its settable fields in declaration
//! order. Each entry names the native field and the Cadence field it reads
//! from; the Cadence name defaults to the native name and is overridden
//! with `#[godence(name = "...")]` when using `#[derive(Record)]`.
//!
//! ```rust
//! use godence::{decode, Composite, Record, Value};
//!
//! #[derive(Debug, Default, Record)]
//! struct Inter {
//!     #[godence(name = "myName")]
//!     my_name: String,
//! }
//!
//! #[derive(Debug, Default, Record)]
//! struct Outer {
//!     inter: Option<Inter>,
//!     #[godence(skip)]
//!     cache: Vec<u8>,
//! }
//!
//! let value = Value::Struct(Composite::new("s.1.EmbeddedStruct").field(
//!     "inter",
//!     Value::Struct(Composite::new("s.1.Inter").field("myName", Value::string("LemonNeko"))),
//! ));
//! let mut outer = Outer::default();
//! decode(&value, &mut outer).unwrap();
//! assert_eq!(outer.inter.unwrap().my_name, "LemonNeko");
//! ```

use tracing::trace;

use crate::error::DecodeError;
use crate::model::Value;

/// One row of a record's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldMapping {
    /// Field name in the native struct.
    pub native: &'static str,
    /// Field name in the Cadence composite.
    pub external: &'static str,
}

impl FieldMapping {
    /// Creates a mapping between differently-named fields.
    pub const fn new(native: &'static str, external: &'static str) -> Self {
        Self { native, external }
    }

    /// Creates a mapping where both sides share one name.
    pub const fn same(name: &'static str) -> Self {
        Self {
            native: name,
            external: name,
        }
    }
}

/// A native struct whose fields are filled from a Cadence composite.
///
/// Usually derived with `#[derive(Record)]`, which also implements
/// [`Decode`](crate::convert::Decode) through [`decode_record`].
pub trait Record {
    /// Settable fields, in declaration order.
    const FIELDS: &'static [FieldMapping];

    /// Decodes `value` into the field at `index` in [`Record::FIELDS`].
    fn decode_field(&mut self, index: usize, value: &Value) -> Result<(), DecodeError>;
}

/// Populates `dest` from a struct, event or resource.
///
/// Fields are resolved in declaration order by their Cadence name, taking
/// the first composite field with that exact name. A field with no match
/// fails the whole decode with [`DecodeError::MissingField`]; fields set
/// before the failure keep their new values.
pub fn decode_record<R: Record + ?Sized>(value: &Value, dest: &mut R) -> Result<(), DecodeError> {
    let composite = match value {
        Value::Optional(None) => return Ok(()),
        Value::Optional(Some(inner)) => return decode_record(inner, dest),
        Value::Struct(c) | Value::Event(c) | Value::Resource(c) => c,
        other => return Err(DecodeError::mismatch::<R>(other.kind())),
    };

    for (index, mapping) in R::FIELDS.iter().enumerate() {
        let field = composite
            .get(mapping.external)
            .ok_or(DecodeError::MissingField {
                field: mapping.external,
            })?;
        trace!(
            composite = %composite.type_id,
            native = mapping.native,
            external = mapping.external,
            "decoding record field"
        );
        dest.decode_field(index, field)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;
    use crate::convert::{decode, Decode};
    use crate::model::{Address, Composite, Kind};

    /// Hand-written record, as `#[derive(Record)]` would expand it.
    #[derive(Debug, Default)]
    struct Simple {
        my_name: String,
    }

    impl Record for Simple {
        const FIELDS: &'static [FieldMapping] = &[FieldMapping::new("my_name", "myName")];

        fn decode_field(&mut self, index: usize, value: &Value) -> Result<(), DecodeError> {
            match index {
                0 => decode(value, &mut self.my_name),
                _ => Err(DecodeError::FieldIndex {
                    record: "Simple",
                    index,
                }),
            }
        }
    }

    impl Decode for Simple {
        fn decode_from(&mut self, value: &Value) -> Result<(), DecodeError> {
            decode_record(value, self)
        }
    }

    fn simple_struct(field: &str) -> Value {
        Value::Struct(
            Composite::new("s.b37650809c8bd4cb.SimpleStruct").field(field, Value::string("LemonNeko")),
        )
    }

    #[test]
    fn test_manual_record() {
        let mut dest = Simple::default();
        decode(&simple_struct("myName"), &mut dest).unwrap();
        assert_eq!(dest.my_name, "LemonNeko");
    }

    #[test]
    fn test_manual_record_missing_field() {
        let mut dest = Simple::default();
        assert_eq!(
            decode(&simple_struct("MyName"), &mut dest),
            Err(DecodeError::MissingField { field: "myName" })
        );
    }

    #[test]
    fn test_record_rejects_non_composites() {
        let mut dest = Simple::default();
        assert!(matches!(
            decode(&Value::string("LemonNeko"), &mut dest),
            Err(DecodeError::TypeMismatch { found: Kind::String, .. })
        ));
    }

    #[derive(Debug, Default, crate::Record)]
    struct Inter {
        #[godence(name = "myName")]
        my_name: String,
    }

    #[derive(Debug, Default, crate::Record)]
    struct Embedded {
        inter: Option<Inter>,
    }

    #[derive(Debug, Default, crate::Record)]
    struct ManyTypes {
        #[godence(name = "intValue")]
        int_value: BigInt,
        #[godence(name = "int8Value")]
        int8_value: i8,
        #[godence(name = "int64Value")]
        int64_value: i64,
        #[godence(name = "uint256Value")]
        uint256_value: BigInt,
        #[godence(name = "uint64Value")]
        uint64_value: u64,
        #[godence(name = "stringValue")]
        string_value: String,
        #[godence(name = "addressValue")]
        address_value: [u8; 8],
        #[godence(name = "boolValue")]
        bool_value: bool,
        #[godence(skip)]
        note: String,
    }

    #[test]
    fn test_derived_record_many_types() {
        let n = BigInt::from(127u8);
        let value = Value::Struct(
            Composite::new("s.0.StructContainsManyType")
                .field("intValue", Value::Int(n.clone()))
                .field("int8Value", Value::Int8(127))
                .field("int64Value", Value::Int64(127))
                .field("uint256Value", Value::UInt256(n.clone()))
                .field("uint64Value", Value::UInt64(127))
                .field("stringValue", Value::string("LemonNeko"))
                .field("addressValue", Value::Address(Address::default()))
                .field("boolValue", Value::Bool(true)),
        );

        let mut dest = ManyTypes {
            note: "kept".to_string(),
            ..Default::default()
        };
        decode(&value, &mut dest).unwrap();
        assert_eq!(dest.int_value, n);
        assert_eq!(dest.int8_value, 127);
        assert_eq!(dest.int64_value, 127);
        assert_eq!(dest.uint256_value, n);
        assert_eq!(dest.uint64_value, 127);
        assert_eq!(dest.string_value, "LemonNeko");
        assert_eq!(dest.address_value, [0u8; 8]);
        assert!(dest.bool_value);
        assert_eq!(dest.note, "kept");
    }

    #[test]
    fn test_derived_field_table() {
        assert_eq!(
            <Inter as Record>::FIELDS,
            &[FieldMapping::new("my_name", "myName")]
        );
        assert_eq!(
            <Embedded as Record>::FIELDS,
            &[FieldMapping::same("inter")]
        );
        assert_eq!(<ManyTypes as Record>::FIELDS.len(), 8);
        assert!(<ManyTypes as Record>::FIELDS.iter().all(|f| f.native != "note"));
    }

    #[test]
    fn test_embedded_record() {
        let value = Value::Struct(Composite::new("s.0.EmbeddedStruct").field(
            "inter",
            Value::Struct(Composite::new("s.0.Inter").field("myName", Value::string("LemonNeko"))),
        ));
        let mut dest = Embedded::default();
        decode(&value, &mut dest).unwrap();
        assert_eq!(dest.inter.unwrap().my_name, "LemonNeko");
    }

    #[test]
    fn test_embedded_absent_optional_stays_none() {
        let value = Value::Struct(Composite::new("s.0.EmbeddedStruct").field("inter", Value::none()));
        let mut dest = Embedded::default();
        decode(&value, &mut dest).unwrap();
        assert!(dest.inter.is_none());
    }

    #[test]
    fn test_events_and_resources_decode() {
        let fields = Composite::new("A.f8d6e0586b0a20c7.ForTest.Simple2")
            .field("myName", Value::string("LemonNeko"));
        for value in [Value::Event(fields.clone()), Value::Resource(fields)] {
            let mut dest = Inter::default();
            decode(&value, &mut dest).unwrap();
            assert_eq!(dest.my_name, "LemonNeko");
        }
    }

    #[test]
    fn test_field_error_aborts_with_partial_state() {
        #[derive(Debug, Default, crate::Record)]
        struct Pair {
            first: String,
            second: String,
        }

        let value = Value::Struct(
            Composite::new("s.0.Pair")
                .field("first", Value::string("set"))
                .field("second", Value::UInt8(127)),
        );
        let mut dest = Pair::default();
        let err = decode(&value, &mut dest).unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { found: Kind::UInt8, .. }));
        assert_eq!(dest.first, "set");
        assert_eq!(dest.second, "");
    }
}
