//! Core data models for jot.
//!
//! These types are shared across all jot crates and represent the domain
//! entities as they appear both in storage and on the wire. Field names
//! serialize in camelCase to match the public API shape.

use serde::{Deserialize, Serialize};

use crate::id::DocId;

/// A note owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Assigned at creation, immutable.
    pub id: DocId,
    pub content: String,
    pub important: bool,
    /// The owning user's id. Set from the authenticated caller, never changes.
    pub owner: DocId,
}

/// An account holding credentials and a collection of owned notes.
///
/// The password hash is part of the stored and serialized shape; the raw
/// password never is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DocId,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub password_hash: String,
}

/// A user with their owned notes expanded to full note objects,
/// in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithNotes {
    #[serde(flatten)]
    pub user: User,
    pub notes: Vec<Note>,
}
