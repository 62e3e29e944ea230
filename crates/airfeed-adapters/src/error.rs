//! Errors surfaced by adapters and fetchers.
//!
//! [`AdapterError`]'s `Display` is the message handed to callers; it never
//! includes internal detail. The wrapped sources carry that detail for logs.

use airfeed_core::NormalizeError;
use std::time::Duration;
use thiserror::Error;

/// Transport-level failure while loading a source document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),
    #[error("unexpected status {0}")]
    Status(hyper::StatusCode),
    #[error("reading body failed: {0}")]
    Body(#[from] hyper::Error),
    #[error("response body is not UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Failure to load data url.")]
    Fetch(#[source] FetchError),

    /// Parse, structural, date and value failures share one caller message;
    /// the wrapped error tells them apart.
    #[error("Failure to parse data.")]
    Parse(#[source] NormalizeError),

    /// Normalisation panicked. Holds the panic payload for logs.
    #[error("Unknown adapter error.")]
    Unknown(String),

    #[error("no adapter named {0:?}")]
    UnknownAdapter(String),

    #[error("API token missing: set {0}")]
    MissingToken(String),

    #[error("unknown timezone {0:?}")]
    InvalidTimezone(String),
}

impl AdapterError {
    /// Caller-facing message, identical to `Display`.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
