//! Shared HTTP plumbing for upstream GET requests.

use reqwest::Client;
use serde_json::Value;

use super::UpstreamError;

/// Thin wrapper over a shared [`reqwest::Client`].
///
/// Clone is cheap - `reqwest::Client` uses `Arc` internally for connection
/// pooling, so the service clients and handlers all share one pool. No
/// request timeout is configured beyond the transport default.
#[derive(Clone, Default)]
pub struct UpstreamClient {
    http: Client,
}

impl UpstreamClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a GET request and parses the response body as JSON.
    pub async fn get_json(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<Value, UpstreamError> {
        let response = self.http.get(url).query(query).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Issues a GET request and returns the response body as text.
    pub async fn get_text(&self, url: &str) -> Result<String, UpstreamError> {
        let response = self.http.get(url).send().await?;
        let response = Self::check(response).await?;
        Ok(response.text().await?)
    }

    /// Issues a GET request and returns the raw response bytes.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, UpstreamError> {
        let response = self.http.get(url).send().await?;
        let response = Self::check(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Maps a non-2xx response to [`UpstreamError::Status`], keeping the
    /// response body as the error message.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, UpstreamError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(UpstreamError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
