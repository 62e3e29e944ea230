//! Normalizer — turns a raw station document into a [`Normalized`] result.
//!
//! Stages run in order: JSON parse → structural decode → filter records
//! without a value → map to [`Measurement`] → canonical rename. The whole
//! document succeeds or fails together; dropping an empty record is not a
//! failure.

use chrono_tz::Tz;

use crate::date;
use crate::error::NormalizeError;
use crate::types::{Measurement, Normalized, RawRecord, SourceDocument};
use crate::value;
use crate::vocabulary;

/// Normalise one station document, interpreting its timestamps in `tz`.
pub fn normalize(raw: &str, tz: Tz) -> Result<Normalized, NormalizeError> {
    let json: serde_json::Value = serde_json::from_str(raw).map_err(NormalizeError::Parse)?;
    let doc: SourceDocument =
        serde_json::from_value(json).map_err(|e| NormalizeError::Structural(e.to_string()))?;

    let mut measurements = map_records(doc.results.collection1, tz)?;
    vocabulary::rename(&mut measurements);

    tracing::debug!(
        name = %doc.name,
        measurements = measurements.len(),
        "normalised document"
    );

    Ok(Normalized {
        name: doc.name,
        measurements,
    })
}

/// Filter and map stage. Output order follows `records`; records whose
/// extracted magnitude is empty are skipped without inspecting their other
/// fields.
pub fn map_records(records: Vec<RawRecord>, tz: Tz) -> Result<Vec<Measurement>, NormalizeError> {
    let total = records.len();
    let mut out = Vec::with_capacity(total);

    for (index, record) in records.into_iter().enumerate() {
        let parsed = value::extract(&record.measured_value);
        if parsed.is_empty() {
            tracing::trace!(index, measured_value = %record.measured_value, "dropping record without value");
            continue;
        }

        let parameter = record
            .parameter
            .ok_or_else(|| NormalizeError::missing_field(index, "parameter"))?
            .into_text();
        let day = record
            .date
            .as_deref()
            .ok_or_else(|| NormalizeError::missing_field(index, "date"))?;
        let time = record
            .time
            .as_deref()
            .ok_or_else(|| NormalizeError::missing_field(index, "time"))?;

        out.push(Measurement {
            parameter,
            date: date::construct(day, time, tz)?,
            value: value::parse_magnitude(&parsed.value)?,
            unit: parsed.unit,
        });
    }

    if out.len() < total {
        tracing::debug!(kept = out.len(), dropped = total - out.len(), "filtered empty records");
    }
    Ok(out)
}
