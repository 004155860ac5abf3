//! Note handlers.
//!
//! Every operation is scoped to the authenticated caller. The id in the
//! path is validated for shape before any persistence call; a well-formed
//! id that matches nothing the caller owns is a 404, whether the note is
//! missing or belongs to someone else.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use jot_core::{CreateNoteRequest, DocId, NoteRepository, ReplaceNoteRequest, UserRepository};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::AppState;

/// Validate the path-supplied id against the 24-hex shape.
pub(crate) fn parse_note_id(raw: &str) -> Result<DocId, ApiError> {
    DocId::parse(raw).map_err(|_| ApiError::BadRequest("Invalid note ID format".to_string()))
}

pub async fn list_notes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let notes = state.db.notes.list_for_owner(&auth.user_id).await?;
    Ok(Json(notes))
}

pub async fn get_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_note_id(&id)?;

    match state.db.notes.find_for_owner(&id, &auth.user_id).await? {
        Some(note) => Ok(Json(note)),
        None => Err(ApiError::NotFound("Note not found".to_string())),
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteBody {
    /// Absent, null, and empty are all rejected identically on create.
    pub content: Option<String>,
    pub important: Option<bool>,
}

pub async fn create_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateNoteBody>,
) -> Result<impl IntoResponse, ApiError> {
    let content = match body.content {
        Some(content) if !content.is_empty() => content,
        _ => return Err(ApiError::BadRequest("Content is missing".to_string())),
    };

    // The owner must exist at the moment of creation; a decoded identity
    // without a backing user is rejected before anything is written.
    let owner = state
        .db
        .users
        .find_by_id(&auth.user_id)
        .await?
        .ok_or_else(|| ApiError::BadRequest("UserId missing or not valid".to_string()))?;

    let note = state
        .db
        .notes
        .insert(CreateNoteRequest {
            content,
            important: body.important.unwrap_or(false),
            owner: owner.id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(note)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteBody {
    pub content: Option<String>,
    pub important: Option<bool>,
}

pub async fn update_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(body): Json<UpdateNoteBody>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_note_id(&id)?;

    // Unlike create, an explicit empty string is accepted here; only an
    // absent content field is rejected.
    let content = body
        .content
        .ok_or_else(|| ApiError::BadRequest("Content is missing".to_string()))?;

    let replaced = state
        .db
        .notes
        .replace_for_owner(
            &id,
            &auth.user_id,
            ReplaceNoteRequest {
                content,
                important: body.important,
            },
        )
        .await?;

    match replaced {
        Some(note) => Ok(Json(note)),
        None => Err(ApiError::NotFound("Note not found".to_string())),
    }
}

pub async fn delete_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_note_id(&id)?;

    if state.db.notes.delete_for_owner(&id, &auth.user_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Note not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_note_id_accepts_24_hex() {
        assert!(parse_note_id("5a3d5da59070081a82a3445b").is_ok());
        assert!(parse_note_id(&"0".repeat(24)).is_ok());
        assert!(parse_note_id("5A3D5DA59070081A82A3445B").is_ok());
    }

    #[test]
    fn test_parse_note_id_rejects_malformed() {
        // One char short, non-hex, and plain garbage all fail the same way.
        for bad in ["5a3d5da59070081a82a3445", "short-string", "", "zz3d5da59070081a82a3445b"] {
            match parse_note_id(bad) {
                Err(ApiError::BadRequest(msg)) => assert_eq!(msg, "Invalid note ID format"),
                other => panic!("expected BadRequest for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_create_body_treats_null_and_absent_content_alike() {
        let absent: CreateNoteBody = serde_json::from_str(r#"{"important": true}"#).unwrap();
        let null: CreateNoteBody = serde_json::from_str(r#"{"content": null}"#).unwrap();
        assert_eq!(absent.content, None);
        assert_eq!(null.content, None);
    }

    #[test]
    fn test_create_body_keeps_empty_string_distinct_from_absent() {
        // The create handler rejects both, but the update handler must see
        // the empty string as present.
        let empty: UpdateNoteBody = serde_json::from_str(r#"{"content": ""}"#).unwrap();
        assert_eq!(empty.content, Some(String::new()));
    }

    #[test]
    fn test_update_body_without_important_deserializes_to_none() {
        let body: UpdateNoteBody =
            serde_json::from_str(r#"{"content": "still here"}"#).unwrap();
        assert_eq!(body.important, None);
    }
}
