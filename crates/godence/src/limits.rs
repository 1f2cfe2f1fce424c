//! Bounds applied when reading untrusted JSON-Cadence documents.
//!
//! Native-to-Cadence conversion is bounded by the depth of the native value
//! itself and needs no limits.

/// Maximum nesting of arrays, dictionaries, optionals and composites.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Maximum length of a JSON-Cadence document in bytes.
pub const MAX_DOCUMENT_LEN: usize = 16 * 1024 * 1024;

/// Number of fractional digits carried by Fix64 and UFix64.
pub const FIXED_POINT_SCALE: u32 = 8;

/// 10^FIXED_POINT_SCALE.
pub const FIXED_POINT_FACTOR: u64 = 100_000_000;
