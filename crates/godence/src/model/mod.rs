//! Data model for Cadence values.
//!
//! This module contains the types on the Cadence side of a conversion:
//! - Values (the tagged union of every supported Cadence type)
//! - Kinds (fieldless discriminants with Cadence type names)
//! - Addresses and storage paths
//! - Composites (structs, events, resources)

pub mod address;
pub mod kind;
pub mod path;
pub mod value;

pub use address::Address;
pub use kind::Kind;
pub use path::{Path, PathDomain};
pub use value::{Composite, Field, Value};
