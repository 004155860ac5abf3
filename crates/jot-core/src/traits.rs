//! Repository traits for jot's persistence layer.
//!
//! These traits define the interfaces concrete storage implementations must
//! satisfy. Every note operation that reads or mutates an existing note is
//! scoped by both the note id and the owner id: a note under a different
//! owner is indistinguishable from a missing one.

use async_trait::async_trait;

use crate::error::Result;
use crate::id::DocId;
use crate::models::{Note, User, UserWithNotes};

/// Request for creating a new note.
#[derive(Debug, Clone)]
pub struct CreateNoteRequest {
    pub content: String,
    pub important: bool,
    /// The authenticated caller, already verified to exist.
    pub owner: DocId,
}

/// Request for replacing a note's mutable fields.
#[derive(Debug, Clone)]
pub struct ReplaceNoteRequest {
    /// May be the empty string; the route layer decides whether that is legal.
    pub content: String,
    /// `None` leaves the stored flag unchanged.
    pub important: Option<bool>,
}

/// Request for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub name: Option<String>,
    /// Already-derived hash. The raw password never reaches this layer.
    pub password_hash: String,
}

/// Repository for owner-scoped note CRUD.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List every note owned by `owner`.
    async fn list_for_owner(&self, owner: &DocId) -> Result<Vec<Note>>;

    /// Fetch a single note, scoped to `owner`. `None` when the id does not
    /// exist or belongs to someone else.
    async fn find_for_owner(&self, id: &DocId, owner: &DocId) -> Result<Option<Note>>;

    /// Insert a new note and return it.
    async fn insert(&self, req: CreateNoteRequest) -> Result<Note>;

    /// Replace a note's content/important, scoped to `owner`. Returns the
    /// updated note, or `None` when not found under that owner.
    async fn replace_for_owner(
        &self,
        id: &DocId,
        owner: &DocId,
        req: ReplaceNoteRequest,
    ) -> Result<Option<Note>>;

    /// Permanently delete a note, scoped to `owner`. Returns whether a row
    /// was deleted.
    async fn delete_for_owner(&self, id: &DocId, owner: &DocId) -> Result<bool>;
}

/// Repository for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user with their owned notes expanded, in creation order.
    async fn list_with_notes(&self) -> Result<Vec<UserWithNotes>>;

    /// Fetch a user by id.
    async fn find_by_id(&self, id: &DocId) -> Result<Option<User>>;

    /// Fetch a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Insert a new user and return it.
    ///
    /// Implementations must surface a lost uniqueness race as
    /// [`crate::Error::DuplicateUsername`].
    async fn insert(&self, req: CreateUserRequest) -> Result<User>;
}
