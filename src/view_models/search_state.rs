//! # Search State
//!
//! The observable state container behind the search UI. Owns the query
//! text, the field schema, the last successful results, and the error
//! flags, and drives one [`RequestLifecycle`] per request type.
//!
//! Mutation discipline: all state changes happen inside this type's
//! methods on the owner's task. Spawned transport tasks never touch state;
//! they send a [`Completion`] message back through an internal channel and
//! the owner reconciles it through the lifecycle guard. The driver layer
//! only reads.

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::mpsc;

use crate::client::{ApiError, ApiTransport};
use crate::config::{FIELDS_PATH, SEARCH_PATH};
use crate::models::{Field, SearchRecord};
use crate::view_models::lifecycle::RequestLifecycle;

/// Which repeatable operation a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Fields,
    Search,
}

/// Outcome of one transport call, routed back to the owner together with
/// the lifecycle token it was started under.
#[derive(Debug)]
struct Completion {
    kind: RequestKind,
    token: u64,
    outcome: Result<Value, ApiError>,
}

/// View model for the search page. Single instance, lives for the session.
pub struct SearchState {
    query: String,
    fields: Vec<Field>,
    results: Vec<SearchRecord>,
    is_error: bool,
    error_message: String,
    fields_lifecycle: RequestLifecycle,
    search_lifecycle: RequestLifecycle,
    transport: Arc<dyn ApiTransport>,
    completion_tx: mpsc::Sender<Completion>,
    completion_rx: mpsc::Receiver<Completion>,
}

impl SearchState {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel(10);
        Self {
            query: String::new(),
            fields: Vec::new(),
            results: Vec::new(),
            is_error: false,
            error_message: String::new(),
            fields_lifecycle: RequestLifecycle::new(),
            search_lifecycle: RequestLifecycle::new(),
            transport,
            completion_tx,
            completion_rx,
        }
    }

    // --- read surface -----------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn results(&self) -> &[SearchRecord] {
        &self.results
    }

    /// True while any request (fields or search) is outstanding.
    pub fn is_loading(&self) -> bool {
        self.fields_lifecycle.is_pending() || self.search_lifecycle.is_pending()
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// The help panel shows once the schema is known and no results are
    /// displayed. Depends only on the fields/results counts, not on the
    /// error flag.
    pub fn show_help(&self) -> bool {
        !self.fields.is_empty() && self.results.is_empty()
    }

    /// Display value of `field` within `record`, with a placeholder for
    /// fields the record does not carry.
    pub fn get_value(&self, field: &str, record: &SearchRecord) -> String {
        record.display_value(field)
    }

    // --- commands ---------------------------------------------------------

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Fetch the field schema. Typically invoked once at startup, safe to
    /// re-trigger at any time.
    pub fn load_fields(&mut self) {
        let token = self.fields_lifecycle.start();
        tracing::info!(token, "field schema requested");
        self.dispatch(RequestKind::Fields, token, FIELDS_PATH, None);
    }

    /// Execute a search for the current query text.
    pub fn search(&mut self) {
        let token = self.search_lifecycle.start();
        // Snapshot the query now; edits made while the request is in
        // flight must not change what was searched.
        let query = self.query.clone();
        tracing::info!(token, query = %query, "search requested");
        self.dispatch(
            RequestKind::Search,
            token,
            SEARCH_PATH,
            Some(json!({ "query": query })),
        );
    }

    fn dispatch(&self, kind: RequestKind, token: u64, path: &'static str, body: Option<Value>) {
        let transport = Arc::clone(&self.transport);
        let tx = self.completion_tx.clone();

        tokio::spawn(async move {
            let outcome = match transport.post(path, body).await {
                Ok(envelope) => envelope.into_result(),
                Err(err) => Err(err),
            };
            // Receiver gone means the owner was dropped; nothing left to
            // reconcile.
            let _ = tx.send(Completion { kind, token, outcome }).await;
        });
    }

    // --- completion handling ----------------------------------------------

    /// Apply the next completion if one has already arrived (non-blocking).
    /// Returns true when a message was consumed, applied or discarded.
    pub fn poll_completion(&mut self) -> bool {
        match self.completion_rx.try_recv() {
            Ok(completion) => {
                self.apply(completion);
                true
            }
            Err(_) => false,
        }
    }

    /// Await the next completion and apply it.
    pub async fn process_completion(&mut self) {
        if let Some(completion) = self.completion_rx.recv().await {
            self.apply(completion);
        }
    }

    fn apply(&mut self, completion: Completion) {
        let Completion {
            kind,
            token,
            outcome,
        } = completion;

        match kind {
            RequestKind::Fields => self.apply_fields(token, outcome),
            RequestKind::Search => self.apply_search(token, outcome),
        }
    }

    fn apply_fields(&mut self, token: u64, outcome: Result<Value, ApiError>) {
        let fields = &mut self.fields;
        let is_error = &mut self.is_error;
        let error_message = &mut self.error_message;

        self.fields_lifecycle.complete(token, move || {
            match outcome.and_then(decode_fields) {
                Ok(schema) => {
                    tracing::debug!(token, count = schema.len(), "field schema applied");
                    *fields = schema;
                    *is_error = false;
                    error_message.clear();
                }
                Err(err) => {
                    tracing::warn!(token, error = %err, "field schema request failed");
                    fields.clear();
                    *is_error = true;
                    *error_message = err.surface_message();
                }
            }
        });
    }

    fn apply_search(&mut self, token: u64, outcome: Result<Value, ApiError>) {
        let results = &mut self.results;
        let is_error = &mut self.is_error;
        let error_message = &mut self.error_message;

        self.search_lifecycle.complete(token, move || {
            match outcome.and_then(decode_records) {
                Ok(records) => {
                    tracing::debug!(token, count = records.len(), "search results applied");
                    *results = records;
                    *is_error = false;
                    error_message.clear();
                }
                Err(err) => {
                    tracing::warn!(token, error = %err, "search request failed");
                    results.clear();
                    *is_error = true;
                    *error_message = err.surface_message();
                }
            }
        });
    }
}

fn decode_fields(payload: Value) -> Result<Vec<Field>, ApiError> {
    serde_json::from_value(payload)
        .map_err(|e| ApiError::decode(format!("field schema payload: {e}")))
}

fn decode_records(payload: Value) -> Result<Vec<SearchRecord>, ApiError> {
    serde_json::from_value(payload)
        .map_err(|e| ApiError::decode(format!("search result payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ChannelTransport;

    #[tokio::test]
    async fn search_should_post_query_snapshot() {
        let (transport, mut calls) = ChannelTransport::new();
        let mut state = SearchState::new(transport);

        state.set_query("a");
        state.search();
        // Editing after dispatch must not change what was searched.
        state.set_query("b");

        let call = calls.recv().await.unwrap();
        assert_eq!(call.path, SEARCH_PATH);
        assert_eq!(call.body, Some(json!({ "query": "a" })));

        call.respond_success(json!([{ "id": 1 }]));
        state.process_completion().await;

        assert_eq!(state.query(), "b");
        assert!(state.has_results());
    }

    #[tokio::test]
    async fn load_fields_should_post_without_body() {
        let (transport, mut calls) = ChannelTransport::new();
        let mut state = SearchState::new(transport);

        state.load_fields();

        let call = calls.recv().await.unwrap();
        assert_eq!(call.path, FIELDS_PATH);
        assert!(call.body.is_none());

        call.respond_success(json!([{ "name": "id" }]));
        state.process_completion().await;

        assert_eq!(state.fields().len(), 1);
        assert_eq!(state.fields()[0].name, "id");
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn malformed_payload_should_surface_as_error() {
        let (transport, mut calls) = ChannelTransport::new();
        let mut state = SearchState::new(transport);

        state.search();
        let call = calls.recv().await.unwrap();
        // Success envelope whose payload is not a list of records.
        call.respond_success(json!("not-a-list"));
        state.process_completion().await;

        assert!(state.is_error());
        assert!(!state.error_message().is_empty());
        assert!(state.results().is_empty());
        assert!(!state.is_loading());
    }
}
