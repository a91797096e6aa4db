use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::{Collection, Document, StoredDocument};

/// GET /plans - List every plan
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let docs = state.store.list_documents(Collection::Plans).await?;

    Ok(Json(docs.into_iter().map(StoredDocument::into_json).collect()))
}

/// POST /plans - Store a free-form plan object
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let doc = Document::from_value(payload)?;
    let stored = state.store.insert_document(Collection::Plans, doc).await?;

    Ok((StatusCode::CREATED, Json(stored.into_json())))
}

/// DELETE /plans/:id - Delete at most one plan. An id that matches nothing
/// still yields a success response; the delete is an idempotent no-op.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid plan id"))?;

    state.store.delete_document(Collection::Plans, id).await?;

    Ok(Json(json!({ "message": "Plan deleted" })))
}
