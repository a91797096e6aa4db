use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub uid: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /jwt - Issue a signed, time-limited token for a client-asserted
/// identity. An empty or missing uid is a client error, never a crash.
pub async fn issue(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let uid = payload.uid.unwrap_or_default();
    let token = state.tokens.issue(&uid, payload.email)?;

    Ok(Json(TokenResponse { token }))
}
