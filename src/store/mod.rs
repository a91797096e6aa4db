pub mod document;
pub mod memory;
pub mod models;
pub mod postgres;

pub use document::{Document, DocumentError};
pub use memory::MemStore;
pub use models::{BudgetEntry, NewBudgetEntry, StoredDocument};
pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// The free-form document collections. Budget entries live in their own
/// typed table and are addressed through dedicated trait methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Routines,
    Plans,
    Questions,
}

impl Collection {
    pub fn table_name(&self) -> &'static str {
        match self {
            Collection::Routines => "routines",
            Collection::Plans => "plans",
            Collection::Questions => "questions",
        }
    }
}

/// Errors from the backing store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Query error: {0}")]
    Query(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Store client injected into every handler. Each method maps to exactly one
/// operation against the backing store; there is no transaction scope
/// spanning calls and no retry policy.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_budget(&self, entry: NewBudgetEntry) -> Result<BudgetEntry, StoreError>;

    /// All entries whose uid equals the owner, in storage order
    async fn budgets_by_owner(&self, uid: &str) -> Result<Vec<BudgetEntry>, StoreError>;

    async fn insert_document(
        &self,
        collection: Collection,
        doc: Document,
    ) -> Result<StoredDocument, StoreError>;

    async fn list_documents(&self, collection: Collection) -> Result<Vec<StoredDocument>, StoreError>;

    /// Unconditionally empties the collection, returning the deleted count
    async fn clear_collection(&self, collection: Collection) -> Result<u64, StoreError>;

    /// Deletes at most one document; returns how many matched (0 or 1)
    async fn delete_document(&self, collection: Collection, id: Uuid) -> Result<u64, StoreError>;

    /// Connectivity probe for the health endpoint
    async fn ping(&self) -> Result<(), StoreError>;
}
