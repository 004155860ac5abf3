//! Request authentication.
//!
//! Login issues an HS256 bearer token carrying the user's id and username;
//! [`AuthUser`] is the extractor that turns `Authorization: Bearer <token>`
//! back into a typed caller identity. Handlers receive the identity as an
//! argument — nothing is smuggled through request extensions.

pub mod password;

use axum::http::request::Parts;
use axum::{extract::FromRequestParts, http::header};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use jot_core::{DocId, Error, User};

use crate::error::ApiError;
use crate::AppState;

/// Token lifetime.
const TOKEN_TTL_DAYS: i64 = 7;

/// Claims embedded in an issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The user's document id, 24-hex.
    pub id: String,
    pub username: String,
    /// Expiry as a Unix timestamp.
    pub exp: i64,
}

/// Sign a bearer token for `user`.
pub fn issue_token(secret: &str, user: &User) -> Result<String, Error> {
    let claims = Claims {
        id: user.id.to_string(),
        username: user.username.clone(),
        exp: (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("token signing failed: {e}")))
}

/// Decode and validate a bearer token, returning its claims.
pub fn decode_token(secret: &str, token: &str) -> Result<Claims, Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| Error::Unauthorized("token missing or invalid".to_string()))
}

/// The authenticated caller, decoded from the request's bearer token.
///
/// Extraction fails with 401 before the handler body runs when the token is
/// missing, malformed, expired, or carries an id that is not a document id.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DocId,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .ok_or_else(|| ApiError::Unauthorized("token missing or invalid".to_string()))?;

        let claims = decode_token(&state.jwt_secret, token)?;
        let user_id = DocId::parse(&claims.id)
            .map_err(|_| ApiError::Unauthorized("token missing or invalid".to_string()))?;

        Ok(AuthUser { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: DocId::parse("65f0c0ffee00112233445566").unwrap(),
            username: "root".to_string(),
            name: None,
            password_hash: "hash".to_string(),
        }
    }

    #[test]
    fn test_issue_then_decode_roundtrip() {
        let user = sample_user();
        let token = issue_token("test-secret", &user).unwrap();
        let claims = decode_token("test-secret", &token).unwrap();
        assert_eq!(claims.id, user.id.to_string());
        assert_eq!(claims.username, "root");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue_token("test-secret", &sample_user()).unwrap();
        assert!(matches!(
            decode_token("other-secret", &token),
            Err(Error::Unauthorized(_))
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(decode_token("test-secret", "not.a.token").is_err());
    }

    #[test]
    fn test_token_expiry_is_in_the_future() {
        let token = issue_token("test-secret", &sample_user()).unwrap();
        let claims = decode_token("test-secret", &token).unwrap();
        assert!(claims.exp > Utc::now().timestamp());
    }
}
