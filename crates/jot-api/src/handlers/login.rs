//! Login: verifies credentials and issues the bearer token the note
//! endpoints consume.

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use jot_core::UserRepository;

use crate::auth::{self, password};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.db.users.find_by_username(&body.username).await?;

    // Unknown user and wrong password answer identically.
    let Some(user) = user else {
        return Err(ApiError::Unauthorized(
            "invalid username or password".to_string(),
        ));
    };

    let stored_hash = user.password_hash.clone();
    let candidate = body.password;
    let valid = tokio::task::spawn_blocking(move || {
        password::verify_password(&candidate, &stored_hash)
    })
    .await
    .map_err(|e| ApiError::Database(jot_core::Error::Internal(e.to_string())))??;

    if !valid {
        return Err(ApiError::Unauthorized(
            "invalid username or password".to_string(),
        ));
    }

    let token = auth::issue_token(&state.jwt_secret, &user)?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}
