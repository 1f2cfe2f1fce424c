//! Interchange formats for Cadence values.
//!
//! - [`json`]: JSON-Cadence, the format used for script arguments, script
//!   results and event payloads

pub mod json;

pub use json::{
    decode_json, decode_json_value, decode_json_value_with_options, decode_json_with_options,
    encode_json, encode_json_value, DecodeOptions,
};
