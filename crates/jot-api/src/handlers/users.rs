//! User handlers: registration and listing.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

use jot_core::{CreateUserRequest, UserRepository};

use crate::auth::password;
use crate::error::ApiError;
use crate::AppState;

/// Minimum username length.
pub(crate) const MIN_USERNAME_LEN: usize = 3;

/// Minimum raw password length.
pub(crate) const MIN_PASSWORD_LEN: usize = 5;

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Run every length check and collect all violations; registration reports
/// them together rather than stopping at the first.
pub(crate) fn validate_registration(username: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if username.chars().count() < MIN_USERNAME_LEN {
        errors.push(format!(
            "username must be at least {MIN_USERNAME_LEN} characters long"
        ));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    errors
}

pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.db.users.list_with_notes().await?;
    Ok(Json(users))
}

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<impl IntoResponse, ApiError> {
    let username = body.username.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let errors = validate_registration(&username, &password);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    // Friendly pre-check for the common case. A registration racing past it
    // still hits the unique index and surfaces as the same 400.
    if state.db.users.find_by_username(&username).await?.is_some() {
        return Err(ApiError::BadRequest("Username already taken".to_string()));
    }

    // Hashing is CPU-bound; keep it off the async workers. The raw password
    // is consumed here and never persisted.
    let password_hash = tokio::task::spawn_blocking(move || password::hash_password(&password))
        .await
        .map_err(|e| ApiError::Database(jot_core::Error::Internal(e.to_string())))??;

    let user = state
        .db
        .users
        .insert(CreateUserRequest {
            username,
            name: body.name,
            password_hash,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}
