//! # API Client Module
//!
//! Transport layer for the search API: the wire envelope, the error
//! taxonomy, and the [`ApiTransport`] abstraction with its reqwest-backed
//! implementation.

pub mod error;
pub mod transport;

pub use error::ApiError;
pub use transport::{ApiEnvelope, ApiTransport, HttpTransport};
