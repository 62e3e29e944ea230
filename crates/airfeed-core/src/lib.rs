//! airfeed-core — air quality feed core library.
//!
//! This crate holds the shared measurement types, configuration, and the
//! normalizer that turns a raw station document into canonical
//! [`Measurement`]s.
//!
//! # Pipeline
//!
//! ```text
//! raw text ──► JSON ──► filter ──► map (value, date, parameter) ──► rename ──► Normalized
//! ```
//!
//! Everything here is synchronous and free of I/O. Fetching lives in
//! `airfeed-adapters`.

pub mod config;
pub mod date;
pub mod error;
pub mod normalizer;
pub mod types;
pub mod value;
pub mod vocabulary;

pub use error::NormalizeError;
pub use normalizer::normalize;
pub use types::{Measurement, Normalized, Parameter, ParsedDate, ParsedValue, RawRecord};
