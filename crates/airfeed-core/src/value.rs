//! Splitting a compound `measuredValue` into magnitude and unit.

use crate::error::NormalizeError;
use crate::types::ParsedValue;

/// Split `measured` at its first space: the magnitude is everything before
/// it, the unit everything after it. Without a space the whole input is the
/// magnitude and the unit is empty.
pub fn extract(measured: &str) -> ParsedValue {
    match measured.split_once(' ') {
        Some((value, unit)) => ParsedValue {
            value: value.to_string(),
            unit: unit.to_string(),
        },
        None => ParsedValue {
            value: measured.to_string(),
            unit: String::new(),
        },
    }
}

/// Parse an extracted magnitude as a number. Surrounding whitespace is
/// ignored. Infinities are accepted; NaN is not a reading.
pub fn parse_magnitude(value: &str) -> Result<f64, NormalizeError> {
    match value.trim().parse::<f64>() {
        Ok(n) if !n.is_nan() => Ok(n),
        _ => Err(NormalizeError::InvalidValue(value.to_string())),
    }
}
