//! REST client for the remote rectangle store.
//!
//! ERROR HANDLING
//! ==============
//! A rejected write with a structured `{"error": "..."}` body becomes
//! [`StoreError::Validation`] so the message can be shown verbatim; every
//! other failure mode (connection, decode, bare non-2xx) is a transport
//! problem surfaced with a generic message. The server is the source of
//! truth for size limits — this client never pre-checks them.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Deserialize;

use geometry::rect::{Size, SizeLocation};

/// Error returned by remote store calls.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The server rejected the payload and said why.
    #[error("{message}")]
    Validation { message: String },
    /// The request never completed or the response body was unreadable.
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success status without a structured error body.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The session was torn down before the request completed.
    #[error("sync cancelled")]
    Cancelled,
}

/// The remote rectangle store as seen by the sync coordinator.
///
/// The interactive core only ever fetches the canonical rectangle and
/// persists new ones; the administrative limits call lives on the concrete
/// [`RectangleApi`] instead.
#[async_trait]
pub trait RectangleStore: Send + Sync {
    /// Fetch the canonical rectangle.
    async fn fetch_size_location(&self) -> Result<SizeLocation, StoreError>;

    /// Persist a sanitized rectangle.
    async fn persist_size_location(&self, rect: SizeLocation) -> Result<(), StoreError>;
}

/// HTTP implementation of the rectangle API.
#[derive(Debug, Clone)]
pub struct RectangleApi {
    base_url: String,
    http: reqwest::Client,
}

/// Structured error body returned on rejected writes.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

fn size_location_endpoint(base_url: &str) -> String {
    format!("{base_url}/api/rectangle/size-location")
}

fn limits_endpoint(base_url: &str) -> String {
    format!("{base_url}/api/rectangle/limits")
}

fn healthz_endpoint(base_url: &str) -> String {
    format!("{base_url}/healthz")
}

impl RectangleApi {
    /// Create a client for the store at `base_url` (scheme + authority,
    /// e.g. `http://127.0.0.1:3000`). A trailing slash is tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http: reqwest::Client::new() }
    }

    /// Check that the server is up via `GET /healthz`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the server is unreachable or unhealthy.
    pub async fn ping(&self) -> Result<(), StoreError> {
        let resp = self.http.get(healthz_endpoint(&self.base_url)).send().await?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(StoreError::Status(resp.status().as_u16()))
        }
    }

    /// Administrative call: replace the server-side size limits via
    /// `POST /api/rectangle/limits`. Not used by the interactive core.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the request fails.
    pub async fn set_limits(&self, limits: Size) -> Result<(), StoreError> {
        let resp = self
            .http
            .post(limits_endpoint(&self.base_url))
            .json(&limits)
            .send()
            .await?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::rejection(resp).await)
        }
    }

    /// Turn a non-success response into the most specific error available.
    async fn rejection(resp: reqwest::Response) -> StoreError {
        let status = resp.status().as_u16();
        match resp.json::<ErrorBody>().await {
            Ok(body) => StoreError::Validation { message: body.error },
            Err(_) => StoreError::Status(status),
        }
    }
}

#[async_trait]
impl RectangleStore for RectangleApi {
    async fn fetch_size_location(&self) -> Result<SizeLocation, StoreError> {
        let resp = self
            .http
            .get(size_location_endpoint(&self.base_url))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(StoreError::Status(resp.status().as_u16()));
        }
        Ok(resp.json::<SizeLocation>().await?)
    }

    async fn persist_size_location(&self, rect: SizeLocation) -> Result<(), StoreError> {
        let resp = self
            .http
            .post(size_location_endpoint(&self.base_url))
            .json(&rect)
            .send()
            .await?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::rejection(resp).await)
        }
    }
}
