//! Note repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use jot_core::{CreateNoteRequest, DocId, Note, NoteRepository, ReplaceNoteRequest, Result};

/// PostgreSQL implementation of NoteRepository.
///
/// Ownership scoping lives in the SQL itself: every lookup and mutation of
/// an existing note filters on `id AND owner_id`, so a note under another
/// owner produces the same empty result as a nonexistent one.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn list_for_owner(&self, owner: &DocId) -> Result<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, content, important, owner_id AS owner
            FROM note
            WHERE owner_id = $1
            ORDER BY created_at_utc, id
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    async fn find_for_owner(&self, id: &DocId, owner: &DocId) -> Result<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, content, important, owner_id AS owner
            FROM note
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.as_str())
        .bind(owner.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    async fn insert(&self, req: CreateNoteRequest) -> Result<Note> {
        let id = DocId::new();

        // Owner linkage is a single atomic write: the back-reference from the
        // user is the owner_id column, enforced by the foreign key.
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO note (id, content, important, owner_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, important, owner_id AS owner
            "#,
        )
        .bind(id.as_str())
        .bind(&req.content)
        .bind(req.important)
        .bind(req.owner.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    async fn replace_for_owner(
        &self,
        id: &DocId,
        owner: &DocId,
        req: ReplaceNoteRequest,
    ) -> Result<Option<Note>> {
        // An omitted `important` keeps the stored flag.
        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE note
            SET content = $3, important = COALESCE($4, important)
            WHERE id = $1 AND owner_id = $2
            RETURNING id, content, important, owner_id AS owner
            "#,
        )
        .bind(id.as_str())
        .bind(owner.as_str())
        .bind(&req.content)
        .bind(req.important)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    async fn delete_for_owner(&self, id: &DocId, owner: &DocId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1 AND owner_id = $2")
            .bind(id.as_str())
            .bind(owner.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
