//! Loading source documents over HTTP.
//!
//! [`Fetch`] is the seam between adapters and the network; [`HttpFetcher`]
//! is the hyper-backed implementation. Only plain `http://` endpoints are
//! reachable through the default connector.

use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::{Request, StatusCode, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::error::FetchError;

/// Something that can GET a URL and return its body as text.
pub trait Fetch: Send + Sync {
    /// Resolve to the body of a `200 OK` response, or an error for any
    /// other status or transport failure.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// GETs source documents with a shared hyper client.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client<HttpConnector, Empty<Bytes>>,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder(TokioExecutor::new()).build_http(),
            timeout,
        }
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let uri = url
            .parse::<Uri>()
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        let req = Request::get(uri)
            .header(hyper::header::ACCEPT, "application/json")
            .body(Empty::<Bytes>::new())
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        let resp = self.client.request(req).await?;
        let status = resp.status();
        tracing::debug!(%status, "source responded");
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = resp.into_body().collect().await?.to_bytes();
        Ok(String::from_utf8(body.to_vec())?)
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tokio::time::timeout(self.timeout, self.get(url))
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))?
    }
}

/// Append the API token to a source URL as the `apitoken` query parameter.
pub fn with_token(url: &str, token: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}apitoken={token}")
}
