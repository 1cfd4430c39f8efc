//! Error taxonomy for API calls
//!
//! Every failure a request can hit is folded into [`ApiError`]. All
//! variants terminate at the view model as `is_error` + `error_message`;
//! none of them propagate past it.

use thiserror::Error;

/// Fallback shown when a failure carries no usable message. The error
/// message must never be blank while the error flag is set.
pub const GENERIC_FAILURE_MESSAGE: &str = "request failed";

/// Client-side API error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server answered at the transport level but marked the operation
    /// unsuccessful and supplied its own message.
    #[error("{message}")]
    Application { message: String },

    /// Network failure or non-success HTTP status.
    #[error("transport: {message}")]
    Transport { message: String },

    /// Response body was not the expected JSON shape.
    #[error("decode: {message}")]
    Decode { message: String },
}

impl ApiError {
    /// Application error with the server's message, falling back to a
    /// generic one when the server omitted it.
    pub fn application(message: Option<String>) -> Self {
        let message = match message {
            Some(m) if !m.trim().is_empty() => m,
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        };
        ApiError::Application { message }
    }

    /// Transport error with a synthesized message when none is available.
    pub fn transport(message: impl Into<String>) -> Self {
        let message: String = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        ApiError::Transport { message }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        ApiError::Decode {
            message: message.into(),
        }
    }

    /// Message to surface through the state container. Guaranteed non-empty.
    pub fn surface_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::decode(err.to_string())
        } else {
            ApiError::transport(err.to_string())
        }
    }
}
