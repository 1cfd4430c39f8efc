//! # Models Module
//!
//! Plain data carried by the view model: the field schema and the search
//! result records. No view or network concerns here.

pub mod field;
pub mod record;

pub use field::Field;
pub use record::{SearchRecord, MISSING_VALUE_PLACEHOLDER};
