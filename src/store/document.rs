use serde_json::{Map, Value};
use thiserror::Error;

/// Fields assigned by the server on insert. Client-supplied values for these
/// are discarded; the server's values win.
const RESERVED_FIELDS: &[&str] = &["id", "createdAt"];

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Request body must be a JSON object")]
    NotAnObject,
}

/// Permissive free-form payload: an open mapping from string keys to JSON
/// values. Routines and plans accept any object shape the caller supplies.
#[derive(Debug, Clone, Default)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Accept any JSON object, stripping reserved server-assigned fields.
    /// Non-object payloads are rejected before the store is touched.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Object(mut fields) => {
                for reserved in RESERVED_FIELDS {
                    fields.remove(*reserved);
                }
                Ok(Self { fields })
            }
            _ => Err(DocumentError::NotAnObject),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_any_object() {
        let doc = Document::from_value(json!({
            "title": "study algebra",
            "slots": ["mon", "wed"],
            "priority": 3,
            "nested": { "notes": "chapter 4" }
        }))
        .unwrap();

        assert_eq!(doc.fields().len(), 4);
        assert_eq!(doc.fields()["priority"], 3);
    }

    #[test]
    fn test_accepts_empty_object() {
        let doc = Document::from_value(json!({})).unwrap();
        assert!(doc.fields().is_empty());
    }

    #[test]
    fn test_rejects_non_objects() {
        assert!(Document::from_value(json!([1, 2, 3])).is_err());
        assert!(Document::from_value(json!("plan")).is_err());
        assert!(Document::from_value(json!(42)).is_err());
        assert!(Document::from_value(Value::Null).is_err());
    }

    #[test]
    fn test_strips_reserved_fields() {
        let doc = Document::from_value(json!({
            "id": "client-supplied",
            "createdAt": "2020-01-01T00:00:00Z",
            "title": "kept"
        }))
        .unwrap();

        assert!(!doc.fields().contains_key("id"));
        assert!(!doc.fields().contains_key("createdAt"));
        assert_eq!(doc.fields()["title"], "kept");
    }
}
