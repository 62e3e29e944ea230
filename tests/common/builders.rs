//! Test builders — ergonomic constructors for station documents and sources.
//!
//! These are built for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use airfeed::config::SourceConfig;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one `collection1` record.
///
/// # Example
///
/// ```rust
/// let rec = RecordBuilder::new("42 µg/m3").parameter("Ozone").build();
/// ```
pub struct RecordBuilder {
    measured_value: String,
    parameter: Value,
    date: String,
    time: String,
}

impl RecordBuilder {
    pub fn new(measured_value: impl Into<String>) -> Self {
        Self {
            measured_value: measured_value.into(),
            parameter: json!("Ozone"),
            date: "Monday, January 1, 2018".to_string(),
            time: "10:00:00".to_string(),
        }
    }

    pub fn parameter(mut self, parameter: &str) -> Self {
        self.parameter = json!(parameter);
        self
    }

    /// Use the object shape: `{"text": parameter}`.
    pub fn labelled(mut self, parameter: &str) -> Self {
        self.parameter = json!({ "text": parameter });
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn time(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "parameter": self.parameter,
            "measuredValue": self.measured_value,
            "date": self.date,
            "time": self.time,
        })
    }
}

/// Wrap records in a station document and serialise it.
pub fn document(name: &str, records: Vec<Value>) -> String {
    json!({ "name": name, "results": { "collection1": records } }).to_string()
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

pub fn india_source(name: &str, url: impl Into<String>) -> SourceConfig {
    SourceConfig {
        name: name.to_string(),
        url: url.into(),
        adapter: "india".to_string(),
        timezone: None,
        city: Some(name.to_string()),
        country: Some("IN".to_string()),
        active: true,
    }
}
