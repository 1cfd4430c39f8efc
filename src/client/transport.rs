//! # API Transport
//!
//! One POST-only call shape covers the whole API surface: both endpoints
//! answer with the same `{ success, result, message }` envelope. The
//! transport reports transport-level failures only; whether the server
//! considered the operation successful is for the caller to judge from
//! the envelope.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::client::error::ApiError;

/// Wire envelope every API endpoint responds with.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub success: bool,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    /// Unwrap the envelope into the payload, turning `success: false`
    /// into an application error carrying the server's message.
    pub fn into_result(self) -> Result<Value, ApiError> {
        if self.success {
            Ok(self.result)
        } else {
            Err(ApiError::application(self.message))
        }
    }
}

/// Asynchronous transport for the search API.
///
/// Implementations execute `POST <base>/<path>` with an optional JSON body
/// and decode the response envelope. The view model never talks to the
/// network directly; it owns an `Arc<dyn ApiTransport>` so tests can swap
/// in a scripted transport.
#[async_trait]
pub trait ApiTransport: Send + Sync + 'static {
    async fn post(&self, path: &str, body: Option<Value>) -> Result<ApiEnvelope, ApiError>;
}

/// reqwest-backed transport.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn post(&self, path: &str, body: Option<Value>) -> Result<ApiEnvelope, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, has_body = body.is_some(), "dispatching API request");

        let mut request = self.http.post(&url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            // Non-2xx is a transport failure; prefer the status line over
            // whatever partial body came with it.
            let reason = status.canonical_reason().unwrap_or("");
            tracing::warn!(status = status.as_u16(), %url, "API request failed");
            return Err(ApiError::transport(format!(
                "{} {}",
                status.as_u16(),
                reason
            )));
        }

        let envelope: ApiEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::decode(format!("malformed response body: {e}")))?;

        tracing::debug!(success = envelope.success, %url, "API response decoded");
        Ok(envelope)
    }
}
