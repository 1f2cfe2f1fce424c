//! Conversion between native values and Cadence values.
//!
//! - [`encode`]: native value to Cadence value
//! - [`decode`]: Cadence value into a native destination
//! - [`Record`]: struct-to-composite field mapping used by the decoder

pub mod decode;
pub mod encode;
pub mod record;

pub use decode::{decode, Decode};
pub use encode::{encode, encode_optional, Encode};
pub use record::{decode_record, FieldMapping, Record};
