//! airfeed-adapters — source adapters for airfeed.
//!
//! An [`Adapter`] knows one family of station documents: how to address
//! the endpoint, which timezone its clocks use, and how to normalise the
//! body. [`fetch_data`] drives a single source end to end:
//!
//! ```text
//! SourceConfig ──► URL + token ──► Fetch ──► Adapter::format_data ──► Normalized
//! ```
//!
//! Each call is independent; nothing is cached or retried.

pub mod error;
pub mod fetch;
pub mod india;

use std::panic::{self, AssertUnwindSafe};

use airfeed_core::config::{Config, SourceConfig};
use airfeed_core::{NormalizeError, Normalized};
use chrono_tz::Tz;

pub use error::{AdapterError, FetchError};
pub use fetch::{Fetch, HttpFetcher};
pub use india::IndiaAdapter;

/// Trait implemented by each source format.
pub trait Adapter: Send + Sync {
    /// Registry key, matched against `SourceConfig::adapter`.
    fn name(&self) -> &'static str;

    /// Civil timezone of the stations this adapter reads.
    fn timezone(&self) -> Tz;

    fn data_url(&self, source: &SourceConfig, token: &str) -> String {
        fetch::with_token(&source.url, token)
    }

    fn format_data(&self, raw: &str, tz: Tz) -> Result<Normalized, NormalizeError> {
        airfeed_core::normalize(raw, tz)
    }
}

static ADAPTERS: &[&dyn Adapter] = &[&IndiaAdapter];

/// Look an adapter up by name.
pub fn adapter_for(name: &str) -> Result<&'static dyn Adapter, AdapterError> {
    ADAPTERS
        .iter()
        .copied()
        .find(|a| a.name() == name)
        .ok_or_else(|| AdapterError::UnknownAdapter(name.to_string()))
}

/// The timezone to read `source` in: its own override, else the adapter's.
pub fn source_timezone(adapter: &dyn Adapter, source: &SourceConfig) -> Result<Tz, AdapterError> {
    match source.timezone.as_deref() {
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_| AdapterError::InvalidTimezone(name.to_string())),
        None => Ok(adapter.timezone()),
    }
}

/// Fetch and normalise one source.
///
/// A fetch failure means the body is never normalised. A panic inside
/// normalisation is caught here and reported as [`AdapterError::Unknown`].
pub async fn fetch_data<F: Fetch>(
    adapter: &dyn Adapter,
    fetcher: &F,
    source: &SourceConfig,
    token: &str,
) -> Result<Normalized, AdapterError> {
    let tz = source_timezone(adapter, source)?;
    let url = adapter.data_url(source, token);

    let body = fetcher.fetch(&url).await.map_err(|e| {
        tracing::error!(source = %source.name, adapter = adapter.name(), error = %e, "failed to load data url");
        AdapterError::Fetch(e)
    })?;

    format_document(adapter, &source.name, &body, tz)
}

/// Normalise an already loaded document with `adapter`. `label` names the
/// document in log events. Failures map onto the caller-facing
/// [`AdapterError`] variants, panics included.
pub fn format_document(
    adapter: &dyn Adapter,
    label: &str,
    raw: &str,
    tz: Tz,
) -> Result<Normalized, AdapterError> {
    match panic::catch_unwind(AssertUnwindSafe(|| adapter.format_data(raw, tz))) {
        Ok(Ok(normalized)) => {
            tracing::info!(
                source = %label,
                measurements = normalized.measurements.len(),
                "source normalised"
            );
            Ok(normalized)
        }
        Ok(Err(e)) => {
            tracing::warn!(source = %label, error = %e, "failed to parse data");
            Err(AdapterError::Parse(e))
        }
        Err(payload) => {
            let reason = panic_reason(payload.as_ref());
            tracing::error!(source = %label, %reason, "adapter panicked");
            Err(AdapterError::Unknown(reason))
        }
    }
}

/// Resolve the adapter and token for `source` from `config`, then
/// [`fetch_data`].
pub async fn fetch_source<F: Fetch>(
    config: &Config,
    fetcher: &F,
    source: &SourceConfig,
) -> Result<Normalized, AdapterError> {
    let adapter = adapter_for(&source.adapter)?;
    let token = config
        .fetch
        .token()
        .ok_or_else(|| AdapterError::MissingToken(config.fetch.token_env.clone()))?;
    fetch_data(adapter, fetcher, source, &token).await
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
