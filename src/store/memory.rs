use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{
    BudgetEntry, Collection, Document, DocumentStore, NewBudgetEntry, StoreError, StoredDocument,
};

/// In-memory store with the same contract as the PostgreSQL backend.
/// Collections are insertion-ordered vectors; backs the test suite.
#[derive(Default)]
pub struct MemStore {
    budgets: RwLock<Vec<BudgetEntry>>,
    collections: RwLock<HashMap<Collection, Vec<StoredDocument>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemStore {
    async fn insert_budget(&self, entry: NewBudgetEntry) -> Result<BudgetEntry, StoreError> {
        let entry = BudgetEntry::new(entry);
        self.budgets.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn budgets_by_owner(&self, uid: &str) -> Result<Vec<BudgetEntry>, StoreError> {
        let budgets = self.budgets.read().await;
        Ok(budgets.iter().filter(|e| e.uid == uid).cloned().collect())
    }

    async fn insert_document(
        &self,
        collection: Collection,
        doc: Document,
    ) -> Result<StoredDocument, StoreError> {
        let stored = StoredDocument::new(doc);
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(stored.clone());
        Ok(stored)
    }

    async fn list_documents(
        &self,
        collection: Collection,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn clear_collection(&self, collection: Collection) -> Result<u64, StoreError> {
        let mut collections = self.collections.write().await;
        let deleted = collections
            .get_mut(&collection)
            .map(|docs| {
                let count = docs.len() as u64;
                docs.clear();
                count
            })
            .unwrap_or(0);
        Ok(deleted)
    }

    async fn delete_document(&self, collection: Collection, id: Uuid) -> Result<u64, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(&collection) else {
            return Ok(0);
        };

        let before = docs.len();
        docs.retain(|d| d.id != id);
        Ok((before - docs.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
