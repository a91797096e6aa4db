use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use super::document::Document;

/// A stored budget transaction. Wire format matches the client contract:
/// `{id, uid, type, amount, createdAt}`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEntry {
    pub id: Uuid,
    pub uid: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a budget insert; id and timestamp are server-assigned
#[derive(Debug, Clone)]
pub struct NewBudgetEntry {
    pub uid: String,
    pub entry_type: String,
    pub amount: f64,
}

impl BudgetEntry {
    pub fn new(entry: NewBudgetEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            uid: entry.uid,
            entry_type: entry.entry_type,
            amount: entry.amount,
            created_at: Utc::now(),
        }
    }
}

/// A free-form document as held in a collection: caller-supplied fields plus
/// the server-assigned identifier and creation timestamp.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub id: Uuid,
    pub fields: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl StoredDocument {
    pub fn new(doc: Document) -> Self {
        Self {
            id: Uuid::new_v4(),
            fields: doc.into_fields(),
            created_at: Utc::now(),
        }
    }

    /// Flatten into the wire shape: caller fields at the top level alongside
    /// `id` and `createdAt`.
    pub fn into_json(self) -> Value {
        let mut map = Map::new();
        map.insert("id".to_string(), json!(self.id));
        for (key, value) in self.fields {
            map.insert(key, value);
        }
        map.insert("createdAt".to_string(), json!(self.created_at));
        Value::Object(map)
    }
}
