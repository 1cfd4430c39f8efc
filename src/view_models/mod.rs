//! # View Models Module
//!
//! The state-owning layer. [`RequestLifecycle`] makes late and duplicate
//! async completions harmless; [`SearchState`] orchestrates two of them
//! (fields, search) and exposes the user-facing operations.

pub mod lifecycle;
pub mod search_state;

pub use lifecycle::RequestLifecycle;
pub use search_state::{RequestKind, SearchState};
