use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::config::DatabaseConfig;

use super::{
    BudgetEntry, Collection, Document, DocumentStore, NewBudgetEntry, StoreError, StoredDocument,
};

/// PostgreSQL-backed store. One table per collection: budgets carry typed
/// columns, the free-form collections keep caller fields in a JSONB column.
pub struct PgStore {
    pool: PgPool,
}

/// Row shape shared by the free-form collections
#[derive(sqlx::FromRow)]
struct DocRow {
    id: Uuid,
    doc: Value,
    created_at: DateTime<Utc>,
}

impl DocRow {
    fn into_stored(self) -> Result<StoredDocument, StoreError> {
        match self.doc {
            Value::Object(fields) => Ok(StoredDocument {
                id: self.id,
                fields,
                created_at: self.created_at,
            }),
            other => Err(StoreError::Query(format!(
                "expected JSON object in doc column, found {}",
                other
            ))),
        }
    }
}

impl PgStore {
    /// Open the connection pool. Called once at startup, before the listener
    /// starts accepting requests.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(&config.url)
            .await?;

        info!("Connected to store");
        Ok(Self { pool })
    }

    /// Create the collection tables if they do not exist yet
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS budgets (
                id UUID PRIMARY KEY,
                uid TEXT NOT NULL,
                entry_type TEXT NOT NULL,
                amount DOUBLE PRECISION NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS budgets_uid_idx ON budgets (uid)")
            .execute(&self.pool)
            .await?;

        for collection in [Collection::Routines, Collection::Plans, Collection::Questions] {
            let ddl = format!(
                r#"
                CREATE TABLE IF NOT EXISTS {} (
                    id UUID PRIMARY KEY,
                    doc JSONB NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL
                )
                "#,
                collection.table_name()
            );
            sqlx::query(&ddl).execute(&self.pool).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn insert_budget(&self, entry: NewBudgetEntry) -> Result<BudgetEntry, StoreError> {
        let entry = BudgetEntry::new(entry);

        sqlx::query(
            "INSERT INTO budgets (id, uid, entry_type, amount, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(entry.id)
        .bind(&entry.uid)
        .bind(&entry.entry_type)
        .bind(entry.amount)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn budgets_by_owner(&self, uid: &str) -> Result<Vec<BudgetEntry>, StoreError> {
        // No explicit ORDER BY: order is whatever the store returns
        let entries = sqlx::query_as::<_, BudgetEntry>(
            "SELECT id, uid, entry_type, amount, created_at FROM budgets WHERE uid = $1",
        )
        .bind(uid)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn insert_document(
        &self,
        collection: Collection,
        doc: Document,
    ) -> Result<StoredDocument, StoreError> {
        let stored = StoredDocument::new(doc);

        let sql = format!(
            "INSERT INTO {} (id, doc, created_at) VALUES ($1, $2, $3)",
            collection.table_name()
        );
        sqlx::query(&sql)
            .bind(stored.id)
            .bind(Value::Object(stored.fields.clone()))
            .bind(stored.created_at)
            .execute(&self.pool)
            .await?;

        Ok(stored)
    }

    async fn list_documents(
        &self,
        collection: Collection,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let sql = format!(
            "SELECT id, doc, created_at FROM {}",
            collection.table_name()
        );
        let rows = sqlx::query_as::<_, DocRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(DocRow::into_stored).collect()
    }

    async fn clear_collection(&self, collection: Collection) -> Result<u64, StoreError> {
        let sql = format!("DELETE FROM {}", collection.table_name());
        let result = sqlx::query(&sql).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn delete_document(&self, collection: Collection, id: Uuid) -> Result<u64, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", collection.table_name());
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
