//! airfeed — air quality feed adapters.
//!
//! Fetches a station's measurement document, normalises it into canonical
//! [`Measurement`]s and hands the result to the caller. This crate
//! re-exports the core and adapter crates so integration tests and the
//! binary can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! Config ──► Adapter ──► Fetch ──► normalize ──► Normalized
//!                                     │
//!                                     └─ value · date · vocabulary
//! ```

pub use airfeed_adapters as adapters;
pub use airfeed_core::{config, date, normalizer, value, vocabulary};

pub use airfeed_adapters::{
    adapter_for, fetch_data, fetch_source, format_document, Adapter, AdapterError, Fetch,
    FetchError, HttpFetcher, IndiaAdapter,
};
pub use airfeed_core::{
    normalize, Measurement, NormalizeError, Normalized, Parameter, ParsedDate, ParsedValue,
    RawRecord,
};
