use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::{Collection, Document, StoredDocument};

/// GET /routines - List every routine, unfiltered and unpaginated
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let docs = state.store.list_documents(Collection::Routines).await?;

    Ok(Json(docs.into_iter().map(StoredDocument::into_json).collect()))
}

/// POST /routines - Store a free-form routine object
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let doc = Document::from_value(payload)?;
    let stored = state.store.insert_document(Collection::Routines, doc).await?;

    Ok((StatusCode::CREATED, Json(stored.into_json())))
}

/// DELETE /routines - Empty the whole collection. No ownership check and no
/// confirmation; this is irreversible.
pub async fn clear(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let deleted = state.store.clear_collection(Collection::Routines).await?;

    Ok(Json(json!({
        "message": "All routines deleted",
        "deletedCount": deleted
    })))
}
