//! Field schema model
//!
//! One entry of the schema returned by the fields endpoint. The driver
//! enumerates these to decide which result columns exist.

use serde::Deserialize;

/// One addressable attribute of a search result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Field {
    /// Key used to look the value up in a result record
    pub name: String,
    /// Human-readable column label
    #[serde(default)]
    pub display: String,
    /// Longer description shown in help
    #[serde(default)]
    pub description: String,
    /// Coarse value type, `"string"` or `"number"`
    #[serde(default)]
    pub data_type: String,
}

impl Field {
    /// Label to render for this field, falling back to the raw name when
    /// the server sent no display text.
    pub fn label(&self) -> &str {
        if self.display.is_empty() {
            &self.name
        } else {
            &self.display
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_should_decode_full_schema_entry() {
        let raw = r#"{
            "name": "size",
            "display": "Size",
            "description": "File size in bytes",
            "data_type": "number"
        }"#;
        let field: Field = serde_json::from_str(raw).unwrap();
        assert_eq!(field.name, "size");
        assert_eq!(field.label(), "Size");
        assert_eq!(field.data_type, "number");
    }

    #[test]
    fn field_should_decode_name_only_entry() {
        let field: Field = serde_json::from_str(r#"{"name": "id"}"#).unwrap();
        assert_eq!(field.name, "id");
        assert_eq!(field.label(), "id");
        assert!(field.description.is_empty());
    }
}
