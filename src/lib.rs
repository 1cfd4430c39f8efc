//! # Queryline - Async Search Client State Component
//!
//! Owns the mutable state behind a search UI (query text, field schema,
//! results, loading and error flags), issues HTTP requests against a search
//! API, and reconciles each request's outcome back into that state without
//! corruption when requests overlap or complete out of order.
//!
//! ## Architecture
//!
//! The crate follows the Model-View-ViewModel (MVVM) pattern; only the
//! model and view-model layers live here, the view is an external driver:
//!
//! ```text
//! ┌─────────────┐   reads /    ┌──────────────┐   messages   ┌───────────┐
//! │   Driver    │   commands   │ SearchState  │◄─────────────│ Transport │
//! │ (view, CLI, │─────────────►│ (view model) │              │  (reqwest │
//! │  bindings)  │              │              │─────────────►│   tasks)  │
//! └─────────────┘              └──────────────┘   dispatch   └───────────┘
//! ```
//!
//! The concurrency hazard is purely completion ordering: a second request
//! can start before the first resolves. [`RequestLifecycle`] restores
//! "latest start wins" semantics with a generation token, without real
//! transport-level cancellation.
//!
//! [`RequestLifecycle`]: view_models::RequestLifecycle

pub mod client;
pub mod cmd_args;
pub mod config;
pub mod models;
pub mod testing;
pub mod view_models;

// Re-export main types for easy access
pub use client::{ApiEnvelope, ApiError, ApiTransport, HttpTransport};
pub use models::{Field, SearchRecord, MISSING_VALUE_PLACEHOLDER};
pub use view_models::{RequestKind, RequestLifecycle, SearchState};
