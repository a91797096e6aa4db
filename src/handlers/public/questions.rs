use axum::{extract::State, response::Json};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::{Collection, StoredDocument};

/// GET /allquestions - List the full question bank. The collection is
/// seeded externally; this API never writes to it.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let docs = state.store.list_documents(Collection::Questions).await?;

    Ok(Json(docs.into_iter().map(StoredDocument::into_json).collect()))
}
