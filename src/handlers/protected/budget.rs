use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use std::collections::HashMap;

use crate::auth::authorize_owner;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;
use crate::store::{BudgetEntry, NewBudgetEntry};

/// POST /budgettracker - Record a budget transaction for the authenticated
/// identity. The payload uid must match the token identity exactly; the
/// ownership check runs before any field validation or store call.
pub async fn create(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<BudgetEntry>), ApiError> {
    let uid = payload
        .get("uid")
        .and_then(Value::as_str)
        .unwrap_or_default();
    authorize_owner(&auth_user.uid, uid)?;

    let new_entry = parse_new_entry(uid, &payload)?;
    let entry = state.store.insert_budget(new_entry).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /budgettracker/:uid - List the owner's entries, in storage order.
/// Only the identity named in the token may read its own entries.
pub async fn list(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<BudgetEntry>>, ApiError> {
    authorize_owner(&auth_user.uid, &uid)?;

    let entries = state.store.budgets_by_owner(&uid).await?;

    Ok(Json(entries))
}

/// Validate the create payload: `type` must be a non-empty string and
/// `amount` numeric. A numeric string is coerced, matching the original
/// system's behavior.
fn parse_new_entry(uid: &str, payload: &Value) -> Result<NewBudgetEntry, ApiError> {
    let mut field_errors = HashMap::new();

    let entry_type = payload
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if entry_type.is_empty() {
        field_errors.insert("type".to_string(), "This field is required".to_string());
    }

    let amount = match payload.get("amount") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    if amount.is_none() {
        field_errors.insert(
            "amount".to_string(),
            "This field is required and must be numeric".to_string(),
        );
    }

    if !field_errors.is_empty() {
        return Err(ApiError::validation_error(
            "Missing required fields",
            Some(field_errors),
        ));
    }

    Ok(NewBudgetEntry {
        uid: uid.to_string(),
        entry_type: entry_type.to_string(),
        amount: amount.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_accepts_numeric_amount() {
        let entry =
            parse_new_entry("a", &json!({ "uid": "a", "type": "food", "amount": 12.5 })).unwrap();
        assert_eq!(entry.amount, 12.5);
        assert_eq!(entry.entry_type, "food");
    }

    #[test]
    fn test_parse_coerces_numeric_string() {
        let entry =
            parse_new_entry("a", &json!({ "uid": "a", "type": "food", "amount": "-42.75" }))
                .unwrap();
        assert_eq!(entry.amount, -42.75);
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let err = parse_new_entry("a", &json!({ "uid": "a" })).unwrap_err();
        match err {
            ApiError::ValidationError { field_errors, .. } => {
                let fields = field_errors.unwrap();
                assert!(fields.contains_key("type"));
                assert!(fields.contains_key("amount"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric_amount() {
        let err = parse_new_entry(
            "a",
            &json!({ "uid": "a", "type": "food", "amount": "a lot" }),
        )
        .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
