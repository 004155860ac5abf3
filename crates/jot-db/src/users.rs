//! User repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use jot_core::{
    CreateUserRequest, DocId, Error, Note, Result, User, UserRepository, UserWithNotes,
};

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: Pool<Postgres>,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list_with_notes(&self) -> Result<Vec<UserWithNotes>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, name, password_hash
            FROM app_user
            ORDER BY created_at_utc, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        // One grouped query for the expansion instead of a query per user.
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, content, important, owner_id AS owner
            FROM note
            ORDER BY created_at_utc, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_owner: HashMap<DocId, Vec<Note>> = HashMap::new();
        for note in notes {
            by_owner.entry(note.owner.clone()).or_default().push(note);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let notes = by_owner.remove(&user.id).unwrap_or_default();
                UserWithNotes { user, notes }
            })
            .collect())
    }

    async fn find_by_id(&self, id: &DocId) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, name, password_hash FROM app_user WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, name, password_hash FROM app_user WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, req: CreateUserRequest) -> Result<User> {
        let id = DocId::new();

        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO app_user (id, username, name, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, name, password_hash
            "#,
        )
        .bind(id.as_str())
        .bind(&req.username)
        .bind(&req.name)
        .bind(&req.password_hash)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            // A registration that lost the check-then-act race lands here via
            // the unique index on username.
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(Error::DuplicateUsername(req.username))
            }
            Err(err) => Err(err.into()),
        }
    }
}
