use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ApiError;

/// Claim set carried by an issued token. Identities are asserted by the
/// client at issue time, not authenticated against a credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(uid: String, email: Option<String>, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            uid,
            email,
            iat: now.timestamp(),
            exp,
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("uid must be a non-empty string")]
    InvalidIdentity,

    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("JWT generation error: {0}")]
    Signing(String),

    #[error("Invalid or expired token: {0}")]
    Verification(String),
}

/// Issues and verifies signed identity tokens. Holds the signing secret and
/// the configured expiry; no persistence and no revocation list.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiry_hours: u64,
}

impl TokenService {
    pub fn new(secret: String, expiry_hours: u64) -> Self {
        Self {
            secret,
            expiry_hours,
        }
    }

    /// Sign a token for a client-asserted identity
    pub fn issue(&self, uid: &str, email: Option<String>) -> Result<String, TokenError> {
        if uid.is_empty() {
            return Err(TokenError::InvalidIdentity);
        }
        if self.secret.is_empty() {
            return Err(TokenError::InvalidSecret);
        }

        let claims = Claims::new(uid.to_string(), email, self.expiry_hours);
        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Validate signature and expiry, returning the decoded claim set
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        if self.secret.is_empty() {
            return Err(TokenError::InvalidSecret);
        }

        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|e| TokenError::Verification(e.to_string()))?;

        Ok(token_data.claims)
    }
}

/// Owner check: the identity decoded from the token must name exactly the
/// identity the request wants to touch. Exact string equality, no
/// normalization; a missing request uid never matches.
pub fn authorize_owner(token_uid: &str, request_uid: &str) -> Result<(), ApiError> {
    if token_uid == request_uid {
        Ok(())
    } else {
        Err(ApiError::forbidden("Forbidden"))
    }
}
