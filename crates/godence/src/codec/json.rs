//! JSON-Cadence encoding and decoding.
//!
//! Every value is an object with a `"type"` discriminator and a `"value"`
//! payload:
//!
//! ```json
//! {"type": "Int8", "value": "15"}
//! {"type": "Optional", "value": null}
//! {"type": "Path", "value": {"domain": "public", "identifier": "flowToken"}}
//! {"type": "Dictionary", "value": [{"key": {...}, "value": {...}}]}
//! {"type": "Struct", "value": {"id": "A.0x1.T", "fields": [{"name": "x", "value": {...}}]}}
//! ```
//!
//! Integers and fixed-point numbers travel as strings so that 64-bit and
//! wider values survive JSON number handling.

use std::str::FromStr;

use num_bigint::BigInt;
use serde_json::{json, Map, Value as Json};
use tracing::debug;

use crate::error::{JsonError, ValueError};
use crate::limits::{MAX_DOCUMENT_LEN, MAX_NESTING_DEPTH};
use crate::model::{Address, Composite, Field, Kind, Path, PathDomain, Value};
use crate::util::{format_fix64, format_ufix64, parse_fix64, parse_ufix64};

// =============================================================================
// OPTIONS
// =============================================================================

/// Options for reading JSON-Cadence documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting of arrays, dictionaries, optionals and composites.
    pub max_depth: usize,
    /// Maximum document length in bytes, checked by [`decode_json`].
    pub max_document_len: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
            max_document_len: MAX_DOCUMENT_LEN,
        }
    }
}

impl DecodeOptions {
    /// Creates options with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Parses a JSON-Cadence document with default options.
pub fn decode_json(input: &str) -> Result<Value, JsonError> {
    decode_json_with_options(input, DecodeOptions::default())
}

/// Parses a JSON-Cadence document.
pub fn decode_json_with_options(input: &str, options: DecodeOptions) -> Result<Value, JsonError> {
    if input.len() > options.max_document_len {
        return Err(JsonError::DocumentTooLarge {
            len: input.len(),
            max: options.max_document_len,
        });
    }
    let json: Json = serde_json::from_str(input)?;
    decode_json_value_with_options(&json, options)
}

/// Converts an already-parsed JSON-Cadence value with default options.
pub fn decode_json_value(json: &Json) -> Result<Value, JsonError> {
    decode_json_value_with_options(json, DecodeOptions::default())
}

/// Converts an already-parsed JSON-Cadence value.
pub fn decode_json_value_with_options(
    json: &Json,
    options: DecodeOptions,
) -> Result<Value, JsonError> {
    let value = Reader { options }.value(json, 0)?;
    debug!(kind = %value.kind(), "decoded JSON-Cadence value");
    Ok(value)
}

struct Reader {
    options: DecodeOptions,
}

impl Reader {
    fn value(&self, json: &Json, depth: usize) -> Result<Value, JsonError> {
        if depth > self.options.max_depth {
            return Err(JsonError::DepthExceeded {
                max: self.options.max_depth,
            });
        }

        let object = json.as_object().ok_or(JsonError::UnexpectedShape {
            context: "value",
            expected: "object",
        })?;
        let type_name = object
            .get("type")
            .and_then(Json::as_str)
            .ok_or(JsonError::UnexpectedShape {
                context: "value",
                expected: "string \"type\"",
            })?;
        let kind = Kind::from_name(type_name)
            .ok_or_else(|| JsonError::UnsupportedType(type_name.to_string()))?;
        let payload = object.get("value").ok_or(JsonError::UnexpectedShape {
            context: "value",
            expected: "\"value\" member",
        })?;

        match kind {
            Kind::Int => Ok(Value::Int(big(kind, payload)?)),
            Kind::Int8 => Ok(Value::Int8(number(kind, payload)?)),
            Kind::Int16 => Ok(Value::Int16(number(kind, payload)?)),
            Kind::Int32 => Ok(Value::Int32(number(kind, payload)?)),
            Kind::Int64 => Ok(Value::Int64(number(kind, payload)?)),
            Kind::Int128 => bounded(kind, payload, Value::int128_from_big),
            Kind::Int256 => bounded(kind, payload, Value::int256_from_big),
            Kind::UInt => bounded(kind, payload, Value::uint_from_big),
            Kind::UInt8 => Ok(Value::UInt8(number(kind, payload)?)),
            Kind::UInt16 => Ok(Value::UInt16(number(kind, payload)?)),
            Kind::UInt32 => Ok(Value::UInt32(number(kind, payload)?)),
            Kind::UInt64 => Ok(Value::UInt64(number(kind, payload)?)),
            Kind::UInt128 => bounded(kind, payload, Value::uint128_from_big),
            Kind::UInt256 => bounded(kind, payload, Value::uint256_from_big),
            Kind::Fix64 => {
                let raw = parse_fix64(text(kind, payload)?).map_err(ValueError::from)?;
                Ok(Value::Fix64(raw))
            }
            Kind::UFix64 => {
                let raw = parse_ufix64(text(kind, payload)?).map_err(ValueError::from)?;
                Ok(Value::UFix64(raw))
            }
            Kind::String => Ok(Value::string(text(kind, payload)?)),
            Kind::Bool => payload.as_bool().map(Value::Bool).ok_or(JsonError::UnexpectedShape {
                context: "Bool",
                expected: "boolean",
            }),
            Kind::Address => Ok(Value::Address(Address::from_hex(text(kind, payload)?)?)),
            Kind::Path => path(payload),
            Kind::Character => Ok(Value::character(text(kind, payload)?)?),
            Kind::Array => {
                let items = array(kind, payload)?
                    .iter()
                    .map(|item| self.value(item, depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::Array(items))
            }
            Kind::Dictionary => {
                let pairs = array(kind, payload)?
                    .iter()
                    .map(|entry| {
                        let key = member(entry, "Dictionary entry", "key")?;
                        let value = member(entry, "Dictionary entry", "value")?;
                        Ok((self.value(key, depth + 1)?, self.value(value, depth + 1)?))
                    })
                    .collect::<Result<Vec<_>, JsonError>>()?;
                Ok(Value::Dictionary(pairs))
            }
            Kind::Optional => match payload {
                Json::Null => Ok(Value::none()),
                inner => Ok(Value::some(self.value(inner, depth + 1)?)),
            },
            Kind::Struct => Ok(Value::Struct(self.composite(payload, depth)?)),
            Kind::Event => Ok(Value::Event(self.composite(payload, depth)?)),
            Kind::Resource => Ok(Value::Resource(self.composite(payload, depth)?)),
        }
    }

    fn composite(&self, payload: &Json, depth: usize) -> Result<Composite, JsonError> {
        let type_id = member(payload, "composite", "id")?
            .as_str()
            .ok_or(JsonError::UnexpectedShape {
                context: "composite",
                expected: "string \"id\"",
            })?;
        let fields = member(payload, "composite", "fields")?
            .as_array()
            .ok_or(JsonError::UnexpectedShape {
                context: "composite",
                expected: "\"fields\" array",
            })?
            .iter()
            .map(|field| {
                let name = member(field, "composite field", "name")?
                    .as_str()
                    .ok_or(JsonError::UnexpectedShape {
                        context: "composite field",
                        expected: "string \"name\"",
                    })?;
                let value = self.value(member(field, "composite field", "value")?, depth + 1)?;
                Ok(Field {
                    name: name.to_string(),
                    value,
                })
            })
            .collect::<Result<Vec<_>, JsonError>>()?;
        Ok(Composite {
            type_id: type_id.to_string(),
            fields,
        })
    }
}

fn member<'a>(
    json: &'a Json,
    context: &'static str,
    name: &'static str,
) -> Result<&'a Json, JsonError> {
    json.get(name).ok_or(JsonError::UnexpectedShape {
        context,
        expected: name,
    })
}

fn text(kind: Kind, payload: &Json) -> Result<&str, JsonError> {
    payload.as_str().ok_or(JsonError::UnexpectedShape {
        context: kind.name(),
        expected: "string",
    })
}

fn array(kind: Kind, payload: &Json) -> Result<&Vec<Json>, JsonError> {
    payload.as_array().ok_or(JsonError::UnexpectedShape {
        context: kind.name(),
        expected: "array",
    })
}

/// Integer literals of every width share one syntax: `-?[0-9]+`.
fn is_integer_literal(literal: &str) -> bool {
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn number<T: FromStr>(kind: Kind, payload: &Json) -> Result<T, JsonError> {
    let literal = text(kind, payload)?;
    let invalid = || JsonError::InvalidNumber {
        kind,
        literal: literal.to_string(),
    };
    if !is_integer_literal(literal) {
        return Err(invalid());
    }
    literal.parse().map_err(|_| invalid())
}

fn big(kind: Kind, payload: &Json) -> Result<BigInt, JsonError> {
    number(kind, payload)
}

fn bounded(
    kind: Kind,
    payload: &Json,
    make: fn(&BigInt) -> Option<Value>,
) -> Result<Value, JsonError> {
    let n = big(kind, payload)?;
    make(&n).ok_or_else(|| JsonError::InvalidNumber {
        kind,
        literal: n.to_string(),
    })
}

fn path(payload: &Json) -> Result<Value, JsonError> {
    let domain = member(payload, "Path", "domain")?
        .as_str()
        .ok_or(JsonError::UnexpectedShape {
            context: "Path",
            expected: "string \"domain\"",
        })?;
    let identifier = member(payload, "Path", "identifier")?
        .as_str()
        .ok_or(JsonError::UnexpectedShape {
            context: "Path",
            expected: "string \"identifier\"",
        })?;
    let domain: PathDomain = domain.parse()?;
    if identifier.is_empty() {
        return Err(ValueError::MalformedPath {
            input: format!("/{domain}/"),
        }
        .into());
    }
    Ok(Value::Path(Path::new(domain, identifier)))
}

// =============================================================================
// ENCODING
// =============================================================================

/// Serializes a value as a compact JSON-Cadence document.
pub fn encode_json(value: &Value) -> String {
    encode_json_value(value).to_string()
}

/// Converts a value into its JSON-Cadence form.
pub fn encode_json_value(value: &Value) -> Json {
    let payload = match value {
        Value::Int(n)
        | Value::Int128(n)
        | Value::Int256(n)
        | Value::UInt(n)
        | Value::UInt128(n)
        | Value::UInt256(n) => Json::String(n.to_string()),
        Value::Int8(n) => Json::String(n.to_string()),
        Value::Int16(n) => Json::String(n.to_string()),
        Value::Int32(n) => Json::String(n.to_string()),
        Value::Int64(n) => Json::String(n.to_string()),
        Value::UInt8(n) => Json::String(n.to_string()),
        Value::UInt16(n) => Json::String(n.to_string()),
        Value::UInt32(n) => Json::String(n.to_string()),
        Value::UInt64(n) => Json::String(n.to_string()),
        Value::Fix64(raw) => Json::String(format_fix64(*raw)),
        Value::UFix64(raw) => Json::String(format_ufix64(*raw)),
        Value::String(s) | Value::Character(s) => Json::String(s.clone()),
        Value::Bool(b) => Json::Bool(*b),
        Value::Address(address) => Json::String(address.to_hex()),
        Value::Path(path) => json!({
            "domain": path.domain.as_str(),
            "identifier": path.identifier,
        }),
        Value::Array(items) => Json::Array(items.iter().map(encode_json_value).collect()),
        Value::Dictionary(pairs) => Json::Array(
            pairs
                .iter()
                .map(|(k, v)| json!({"key": encode_json_value(k), "value": encode_json_value(v)}))
                .collect(),
        ),
        Value::Optional(None) => Json::Null,
        Value::Optional(Some(inner)) => encode_json_value(inner),
        Value::Struct(c) | Value::Event(c) | Value::Resource(c) => composite_json(c),
    };

    let mut object = Map::new();
    object.insert("type".to_string(), Json::String(value.kind().name().to_string()));
    object.insert("value".to_string(), payload);
    Json::Object(object)
}

fn composite_json(composite: &Composite) -> Json {
    let fields: Vec<Json> = composite
        .fields
        .iter()
        .map(|f| json!({"name": f.name, "value": encode_json_value(&f.value)}))
        .collect();
    json!({"id": composite.type_id, "fields": fields})
}
