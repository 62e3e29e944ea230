//! Canonical parameter and unit vocabulary.
//!
//! Stations label pollutants and units in their own words; downstream
//! consumers expect the short codes below. Lookups are exact and
//! case-sensitive. Anything not in a table passes through untouched.

use phf::phf_map;

use crate::types::Measurement;

/// Source parameter label → canonical parameter code.
pub static PARAMETERS: phf::Map<&'static str, &'static str> = phf_map! {
    "Particulate Matter < 2.5 µg" => "pm25",
    "Particulate Matter < 10 µg" => "pm10",
    "Nitrogen Dioxide" => "no2",
    "Ozone" => "o3",
};

/// Source unit → canonical unit.
pub static UNITS: phf::Map<&'static str, &'static str> = phf_map! {
    "µg/m3" => "µg/m³",
};

pub fn canonical_parameter(parameter: &str) -> Option<&'static str> {
    PARAMETERS.get(parameter).copied()
}

pub fn canonical_unit(unit: &str) -> Option<&'static str> {
    UNITS.get(unit).copied()
}

/// Rewrite every measurement's `parameter` and `unit` to canonical form in
/// place. Canonical codes are never table keys, so a second pass is a no-op.
pub fn rename(measurements: &mut [Measurement]) {
    for m in measurements.iter_mut() {
        if let Some(code) = canonical_parameter(&m.parameter) {
            m.parameter = code.to_string();
        }
        if let Some(unit) = canonical_unit(&m.unit) {
            m.unit = unit.to_string();
        }
    }
}
