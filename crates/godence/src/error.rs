//! Error types for Cadence value conversion and interchange.

use thiserror::Error;

use crate::model::Kind;

/// Error raised when text cannot be turned into a Cadence scalar.
///
/// Covers the malformed-input cases of the encoder (addresses, paths,
/// characters and fixed-point literals) and of the JSON-Cadence codec.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("malformed address {input:?}: {source}")]
    MalformedAddress {
        input: String,
        source: hex::FromHexError,
    },

    #[error("malformed path {input:?}: expected /domain/identifier")]
    MalformedPath { input: String },

    #[error("unknown path domain {domain:?}")]
    UnknownPathDomain { domain: String },

    #[error("malformed character {input:?}: expected a single grapheme cluster")]
    MalformedCharacter { input: String },

    #[error(transparent)]
    FixedPoint(#[from] FixedPointError),
}

/// Error parsing fixed-point decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixedPointError {
    #[error("invalid fixed-point literal {input:?}")]
    Invalid { input: String },

    #[error("fixed-point literal {input:?} has more than 8 fractional digits")]
    TooPrecise { input: String },

    #[error("fixed-point literal {input:?} out of range for {kind}")]
    OutOfRange { input: String, kind: Kind },
}

/// Error converting a native value into a Cadence value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("unsupported type: {type_name}")]
    UnsupportedType { type_name: &'static str },

    #[error("unsupported {type_name} value: {value}")]
    UnsupportedValue {
        type_name: &'static str,
        value: String,
    },

    #[error(transparent)]
    Malformed(#[from] ValueError),
}

/// Error writing a Cadence value into a native destination.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("unsupported type: {type_name}")]
    UnsupportedType { type_name: &'static str },

    #[error("type mismatch: cannot decode Cadence {found} into {target}")]
    TypeMismatch { target: &'static str, found: Kind },

    #[error("unsupported value: Cadence {kind} {value} does not fit in {target}")]
    UnsupportedValue {
        kind: Kind,
        value: String,
        target: &'static str,
    },

    #[error("cannot find field named {field} in cadence struct/event/resource")]
    MissingField { field: &'static str },

    #[error("field index {index} out of range for record {record}")]
    FieldIndex { record: &'static str, index: usize },
}

impl DecodeError {
    /// Builds a type mismatch for destination `T`.
    pub fn mismatch<T: ?Sized>(found: Kind) -> Self {
        DecodeError::TypeMismatch {
            target: std::any::type_name::<T>(),
            found,
        }
    }
}

/// Error reading or writing JSON-Cadence documents.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JsonError {
    #[error("invalid JSON: {0}")]
    Syntax(String),

    #[error("malformed JSON-Cadence {context}: expected {expected}")]
    UnexpectedShape {
        context: &'static str,
        expected: &'static str,
    },

    #[error("unsupported Cadence type {0:?}")]
    UnsupportedType(String),

    #[error("invalid {kind} literal {literal:?}")]
    InvalidNumber { kind: Kind, literal: String },

    #[error("document length {len} exceeds maximum {max}")]
    DocumentTooLarge { len: usize, max: usize },

    #[error("nesting depth exceeds maximum {max}")]
    DepthExceeded { max: usize },

    #[error(transparent)]
    Value(#[from] ValueError),
}

impl From<serde_json::Error> for JsonError {
    fn from(err: serde_json::Error) -> Self {
        JsonError::Syntax(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_threadsafe<T: Send + Sync>() {}

    #[test]
    fn test_errors_threadsafe() {
        assert_threadsafe::<EncodeError>();
        assert_threadsafe::<DecodeError>();
        assert_threadsafe::<JsonError>();
    }

    #[test]
    fn test_missing_field_message() {
        let err = DecodeError::MissingField { field: "none" };
        assert_eq!(
            err.to_string(),
            "cannot find field named none in cadence struct/event/resource"
        );
    }

    #[test]
    fn test_mismatch_names_destination() {
        let err = DecodeError::mismatch::<i8>(Kind::Int16);
        assert_eq!(
            err.to_string(),
            "type mismatch: cannot decode Cadence Int16 into i8"
        );
    }

    #[test]
    fn test_fixed_point_error_is_malformed_input() {
        let err: EncodeError = ValueError::from(FixedPointError::Invalid {
            input: "x".to_string(),
        })
        .into();
        assert!(matches!(err, EncodeError::Malformed(ValueError::FixedPoint(_))));
    }
}
