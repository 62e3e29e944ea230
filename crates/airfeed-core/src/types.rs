//! Core types for airfeed-core.
//!
//! Two families live here: the loosely-shaped records as the station
//! publishes them ([`RawRecord`], [`Parameter`]) and the canonical output
//! ([`Measurement`], [`Normalized`]) handed to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Source document
// ---------------------------------------------------------------------------

/// Top-level shape of a station document. Only the fields the normalizer
/// reads are modelled; anything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SourceDocument {
    pub name: String,
    pub results: SourceResults,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SourceResults {
    pub collection1: Vec<RawRecord>,
}

/// One measurement as received from the station.
///
/// `date`, `time` and `parameter` are optional because records without a
/// value are dropped before they are ever looked at; a surviving record
/// missing one of them is a structural failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Magnitude and unit in one string, e.g. `"42 µg/m3"`.
    pub measured_value: String,
    #[serde(default)]
    pub parameter: Option<Parameter>,
    /// Calendar date in the station's locale, e.g. `"Monday, January 1, 2018"`.
    #[serde(default)]
    pub date: Option<String>,
    /// Wall-clock time in the station's locale, e.g. `"10:00:00"`.
    #[serde(default)]
    pub time: Option<String>,
}

/// The `parameter` field arrives either as a bare string or as an object
/// carrying the label under `text`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Parameter {
    Plain(String),
    Labelled { text: String },
}

impl Parameter {
    /// The parameter label regardless of which shape it arrived in.
    pub fn into_text(self) -> String {
        match self {
            Parameter::Plain(text) | Parameter::Labelled { text } => text,
        }
    }
}

// ---------------------------------------------------------------------------
// Intermediate values
// ---------------------------------------------------------------------------

/// A `measuredValue` split into its magnitude and unit substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedValue {
    /// Magnitude as text. Empty means the record carries no reading.
    pub value: String,
    pub unit: String,
}

impl ParsedValue {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// A station timestamp resolved to an absolute instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDate {
    pub utc: DateTime<Utc>,
    /// The same instant rendered in the station's timezone with its offset,
    /// e.g. `2018-01-01T10:00:00+05:30`.
    pub local: String,
}

// ---------------------------------------------------------------------------
// Canonical output
// ---------------------------------------------------------------------------

/// One normalised pollutant reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Canonical parameter code (`pm25`, `pm10`, `no2`, `o3`) or the source
    /// label when it has no canonical form.
    pub parameter: String,
    pub date: ParsedDate,
    pub value: f64,
    pub unit: String,
}

/// The normalised form of one station document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Normalized {
    /// Source location identifier as published by the station.
    pub name: String,
    /// Readings in source order, records without a value removed.
    pub measurements: Vec<Measurement>,
}
