//! Testing infrastructure for the search state component
//!
//! Provides a scripted transport so view-model behavior can be tested
//! without a network: each `post` surfaces as a [`ScriptedCall`] the test
//! inspects and resolves in whatever order the scenario needs, which is
//! exactly how out-of-order completions are reproduced deterministically.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use crate::client::{ApiEnvelope, ApiError, ApiTransport};

/// One captured `post` call, waiting for the test to resolve it.
#[derive(Debug)]
pub struct ScriptedCall {
    pub path: String,
    pub body: Option<Value>,
    responder: oneshot::Sender<Result<ApiEnvelope, ApiError>>,
}

impl ScriptedCall {
    /// Resolve the call with an arbitrary transport outcome.
    pub fn respond(self, response: Result<ApiEnvelope, ApiError>) {
        let _ = self.responder.send(response);
    }

    /// Resolve with a `success: true` envelope carrying `result`.
    pub fn respond_success(self, result: Value) {
        self.respond(Ok(ApiEnvelope {
            success: true,
            result,
            message: None,
        }));
    }

    /// Resolve with a `success: false` envelope carrying a server message.
    pub fn respond_failure(self, message: &str) {
        self.respond(Ok(ApiEnvelope {
            success: false,
            result: Value::Null,
            message: Some(message.to_string()),
        }));
    }

    /// Resolve with a transport-level failure.
    pub fn respond_transport_error(self, message: &str) {
        self.respond(Err(ApiError::transport(message)));
    }
}

/// Transport whose calls are resolved by the test instead of a server.
pub struct ChannelTransport {
    calls: mpsc::UnboundedSender<ScriptedCall>,
}

impl ChannelTransport {
    /// Create the transport plus the receiving end the test drains calls
    /// from.
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<ScriptedCall>) {
        let (calls, call_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { calls }), call_rx)
    }
}

#[async_trait]
impl ApiTransport for ChannelTransport {
    async fn post(&self, path: &str, body: Option<Value>) -> Result<ApiEnvelope, ApiError> {
        let (responder, response_rx) = oneshot::channel();
        let call = ScriptedCall {
            path: path.to_string(),
            body,
            responder,
        };

        if self.calls.send(call).is_err() {
            return Err(ApiError::transport("scripted call receiver dropped"));
        }

        response_rx
            .await
            .unwrap_or_else(|_| Err(ApiError::transport("scripted call never resolved")))
    }
}
