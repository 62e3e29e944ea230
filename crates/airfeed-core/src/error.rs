//! Normalisation errors.
//!
//! Every failure inside the normalizer is one of these variants. Callers
//! that only need the coarse "could not parse" signal can ignore the
//! distinction; tests and logs use it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The document is not valid JSON.
    #[error("malformed JSON document: {0}")]
    Parse(#[source] serde_json::Error),

    /// The JSON is well formed but lacks the expected fields or shape.
    #[error("unexpected document structure: {0}")]
    Structural(String),

    /// A record's date and time could not be resolved in the station timezone.
    #[error("invalid date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },

    /// A record's extracted magnitude is not a number.
    #[error("invalid measured value {0:?}")]
    InvalidValue(String),
}

impl NormalizeError {
    pub(crate) fn missing_field(index: usize, field: &str) -> Self {
        NormalizeError::Structural(format!("results.collection1[{index}] has no `{field}`"))
    }
}
