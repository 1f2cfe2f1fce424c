//! Fixed-point decimal parsing and formatting.
//!
//! Fix64 and UFix64 store an integer scaled by 10^8:
//! - `"127.0"` parses to `12_700_000_000`
//! - `12_700_000_000` formats as `"127.00000000"`

use crate::error::FixedPointError;
use crate::limits::{FIXED_POINT_FACTOR, FIXED_POINT_SCALE};
use crate::model::Kind;

/// Splits decimal text into a sign and a scaled magnitude.
fn parse_scaled(input: &str, kind: Kind) -> Result<(bool, u128), FixedPointError> {
    let invalid = || FixedPointError::Invalid {
        input: input.to_string(),
    };

    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => {
            if frac_part.is_empty() {
                return Err(invalid());
            }
            (int_part, frac_part)
        }
        None => (body, ""),
    };

    if int_part.is_empty()
        || !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }
    if frac_part.len() > FIXED_POINT_SCALE as usize {
        return Err(FixedPointError::TooPrecise {
            input: input.to_string(),
        });
    }

    let out_of_range = || FixedPointError::OutOfRange {
        input: input.to_string(),
        kind,
    };

    let whole: u128 = int_part.parse().map_err(|_| out_of_range())?;
    let mut frac: u128 = if frac_part.is_empty() {
        0
    } else {
        frac_part.parse().map_err(|_| invalid())?
    };
    for _ in frac_part.len()..FIXED_POINT_SCALE as usize {
        frac *= 10;
    }

    let magnitude = whole
        .checked_mul(FIXED_POINT_FACTOR as u128)
        .and_then(|scaled| scaled.checked_add(frac))
        .ok_or_else(out_of_range)?;

    Ok((negative, magnitude))
}

/// Parses signed decimal text into a raw Fix64 value.
pub fn parse_fix64(input: &str) -> Result<i64, FixedPointError> {
    let (negative, magnitude) = parse_scaled(input, Kind::Fix64)?;
    let out_of_range = || FixedPointError::OutOfRange {
        input: input.to_string(),
        kind: Kind::Fix64,
    };

    if negative {
        if magnitude > i64::MAX as u128 + 1 {
            return Err(out_of_range());
        }
        Ok((magnitude as i128).wrapping_neg() as i64)
    } else {
        i64::try_from(magnitude).map_err(|_| out_of_range())
    }
}

/// Parses unsigned decimal text into a raw UFix64 value.
pub fn parse_ufix64(input: &str) -> Result<u64, FixedPointError> {
    let (negative, magnitude) = parse_scaled(input, Kind::UFix64)?;
    if negative {
        return Err(FixedPointError::Invalid {
            input: input.to_string(),
        });
    }
    u64::try_from(magnitude).map_err(|_| FixedPointError::OutOfRange {
        input: input.to_string(),
        kind: Kind::UFix64,
    })
}

/// Formats a raw Fix64 value with exactly 8 fractional digits.
pub fn format_fix64(raw: i64) -> String {
    let sign = if raw < 0 { "-" } else { "" };
    let magnitude = raw.unsigned_abs();
    format!(
        "{}{}.{:08}",
        sign,
        magnitude / FIXED_POINT_FACTOR,
        magnitude % FIXED_POINT_FACTOR
    )
}

/// Formats a raw UFix64 value with exactly 8 fractional digits.
pub fn format_ufix64(raw: u64) -> String {
    format!("{}.{:08}", raw / FIXED_POINT_FACTOR, raw % FIXED_POINT_FACTOR)
}
