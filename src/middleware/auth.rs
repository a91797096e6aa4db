use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::auth::Claims;
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated identity extracted from the bearer token, available to
/// downstream handlers for the lifetime of the request only.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub uid: String,
    pub email: Option<String>,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            uid: claims.uid,
            email: claims.email,
        }
    }
}

/// Bearer-token authentication middleware for owned-data routes.
///
/// A missing credential is 401; a credential that is present but malformed,
/// tampered with or expired is 403. On success the decoded identity is
/// inserted into the request extensions.
pub async fn bearer_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

    let token = bearer_token(header).ok_or_else(|| ApiError::forbidden("Forbidden"))?;

    let claims = state
        .tokens
        .verify(token)
        .map_err(|_| ApiError::forbidden("Forbidden"))?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Extract the token from a `Bearer <token>` header value
fn bearer_token(header: &HeaderValue) -> Option<&str> {
    let value = header.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_extraction() {
        let header = HeaderValue::from_static("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&header), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes() {
        let header = HeaderValue::from_static("Basic dXNlcjpwYXNz");
        assert_eq!(bearer_token(&header), None);
    }

    #[test]
    fn test_bearer_token_rejects_empty_token() {
        let header = HeaderValue::from_static("Bearer ");
        assert_eq!(bearer_token(&header), None);
    }

    #[test]
    fn test_bearer_token_rejects_bare_value() {
        let header = HeaderValue::from_static("abc.def.ghi");
        assert_eq!(bearer_token(&header), None);
    }
}
