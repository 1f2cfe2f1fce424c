//! Godence: marshalling between native Rust values and Cadence values.
//!
//! This crate converts native scalars, collections and records into the
//! strongly-typed value model of the Cadence smart-contract language, and
//! decodes Cadence script results, structs and events back into native
//! structures.
//!
//! # Overview
//!
//! - **Encode**: a native value becomes exactly one Cadence [`Value`]
//!   (integers keep their width, `BigInt` picks the smallest fitting width,
//!   sequences become arrays, maps become dictionaries).
//! - **Decode**: a Cadence [`Value`] is written into a caller-owned
//!   destination. Optionals are unwrapped first; absent optionals leave the
//!   destination untouched.
//! - **Records**: `#[derive(Record)]` maps struct fields onto the fields of
//!   a Cadence struct, event or resource by name, with
//!   `#[godence(name = "...")]` overriding the native field name.
//!
//! # Quick Start
//!
//! ```rust
//! use godence::{decode, encode, Composite, Record, Value};
//!
//! #[derive(Debug, Default, Record)]
//! struct Profile {
//!     #[godence(name = "myName")]
//!     my_name: String,
//!     age: u8,
//! }
//!
//! // Native -> Cadence
//! let arg = encode(&15i8).unwrap();
//! assert_eq!(arg, Value::Int8(15));
//!
//! // Cadence -> native
//! let result = Value::Struct(
//!     Composite::new("s.0123.Profile")
//!         .field("myName", Value::string("LemonNeko"))
//!         .field("age", Value::UInt8(18)),
//! );
//! let mut profile = Profile::default();
//! decode(&result, &mut profile).unwrap();
//! assert_eq!(profile.my_name, "LemonNeko");
//! assert_eq!(profile.age, 18);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Cadence value model (Value, Kind, Address, Path, Composite)
//! - [`convert`]: Encoder, decoder and record mapping
//! - [`classify`]: Kind predicates used by the decoder
//! - [`native`]: Marker types selecting a Cadence kind on encode
//! - [`codec`]: JSON-Cadence interchange format
//! - [`error`]: Error types
//! - [`limits`]: Bounds applied to untrusted input

// Lets `#[derive(Record)]` expand to `::godence::...` paths inside this crate.
extern crate self as godence;

pub mod classify;
pub mod codec;
pub mod convert;
pub mod error;
pub mod limits;
pub mod model;
pub mod native;
pub mod util;

pub use classify::is_address_or_path;
pub use codec::{
    decode_json, decode_json_value, decode_json_value_with_options, decode_json_with_options,
    encode_json, encode_json_value, DecodeOptions,
};
pub use convert::{
    decode, decode_record, encode, encode_optional, Decode, Encode, FieldMapping, Record,
};
pub use error::{DecodeError, EncodeError, FixedPointError, JsonError, ValueError};
pub use model::{Address, Composite, Field, Kind, Path, PathDomain, Value};
pub use native::{Character, Fix64, HexAddress, PathString, UFix64};

pub use ::godence_derive::Record;
pub use ::num_bigint::{BigInt, BigUint};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
