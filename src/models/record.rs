//! Search result record model
//!
//! A result is a heterogeneous record keyed by field name. A field absent
//! from a given record is a valid state and renders as a placeholder,
//! never an error.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Placeholder rendered for a field a record does not carry.
pub const MISSING_VALUE_PLACEHOLDER: &str = "—";

/// One search result: a mapping from field name to value.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct SearchRecord(Map<String, Value>);

impl SearchRecord {
    pub fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    /// Raw value for a field, if the record carries it.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Value rendered for display. Absent fields and explicit JSON nulls
    /// both come back as [`MISSING_VALUE_PLACEHOLDER`].
    pub fn display_value(&self, field: &str) -> String {
        match self.0.get(field) {
            None | Some(Value::Null) => MISSING_VALUE_PLACEHOLDER.to_string(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> SearchRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_field_should_render_placeholder() {
        let rec = record(json!({}));
        assert_eq!(rec.display_value("x"), MISSING_VALUE_PLACEHOLDER);
        assert!(rec.get("x").is_none());
    }

    #[test]
    fn present_field_should_render_value() {
        let rec = record(json!({"x": 5}));
        assert_eq!(rec.display_value("x"), "5");
        assert_eq!(rec.get("x"), Some(&json!(5)));
    }

    #[test]
    fn string_field_should_render_without_quotes() {
        let rec = record(json!({"name": "report.pdf"}));
        assert_eq!(rec.display_value("name"), "report.pdf");
    }

    #[test]
    fn null_field_should_render_placeholder() {
        let rec = record(json!({"size": null}));
        assert_eq!(rec.display_value("size"), MISSING_VALUE_PLACEHOLDER);
    }
}
