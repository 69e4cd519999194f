//! Transport abstraction

use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use std::sync::Arc;

/// A response as seen by the fetch path
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: String,
}

impl RawResponse {
    /// Create a response with no headers
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Value of a header, looked up case-insensitively.
    ///
    /// Repeated header lines are joined with `", "`, which is equivalent for
    /// list-valued headers such as `Link`. Non-UTF-8 values are skipped.
    pub fn header(&self, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        let values: Vec<&str> = self
            .headers
            .get_all(name.as_str())
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }
}

/// Issues GET requests.
///
/// Implementations return `Error::Transport` for connection-level failures
/// and hand back every completed response, whatever its status.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET an absolute URL
    async fn get(&self, url: &str) -> Result<RawResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        (**self).get(url).await
    }
}
