//! Fake station feed server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `GET /feeds/{station}?apitoken=...` with whatever
//! status and body the test registered for that station, and records the
//! tokens it was called with.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeSourceApi::start().await.unwrap();
//! api.serve("delhi", 200, DELHI_OZONE).await;
//! let url = api.feed_url("delhi");
//! ```

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Default)]
struct ApiState {
    /// station -> (status, body)
    feeds: HashMap<String, (u16, String)>,
    /// `apitoken` values received, in request order.
    tokens: Vec<Option<String>>,
}

/// Handle to the running fake feed server.
pub struct FakeSourceApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeSourceApi {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/feeds/{station}", get(feed))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// URL of a station feed, without the token.
    pub fn feed_url(&self, station: &str) -> String {
        format!("http://{}/feeds/{}", self.addr, station)
    }

    /// Register the response for a station.
    pub async fn serve(&self, station: &str, status: u16, body: &str) {
        let mut state = self.state.lock().await;
        state
            .feeds
            .insert(station.to_string(), (status, body.to_string()));
    }

    pub async fn tokens_seen(&self) -> Vec<Option<String>> {
        self.state.lock().await.tokens.clone()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn feed(
    Path(station): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<Mutex<ApiState>>>,
) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.tokens.push(params.get("apitoken").cloned());

    match state.feeds.get(&station) {
        Some((status, body)) => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body.clone(),
        ),
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}
