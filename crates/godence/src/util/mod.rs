//! Text utilities for Cadence scalars.

pub mod fixed;
pub mod grapheme;

pub use fixed::{format_fix64, format_ufix64, parse_fix64, parse_ufix64};
pub use grapheme::is_single_grapheme;
