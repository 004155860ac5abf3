//! # jot-db
//!
//! PostgreSQL database layer for jot.
//!
//! This crate provides:
//! - Connection pool management
//! - Repository implementations for notes and user accounts
//! - Embedded schema migrations
//!
//! ## Example
//!
//! ```rust,ignore
//! use jot_db::Database;
//! use jot_core::{CreateNoteRequest, DocId, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/jot").await?;
//!
//!     let note = db.notes.insert(CreateNoteRequest {
//!         content: "Hello, world!".to_string(),
//!         important: false,
//!         owner: DocId::parse("65f0c0ffee00112233445566")?,
//!     }).await?;
//!
//!     println!("Created note: {}", note.id);
//!     db.close().await;
//!     Ok(())
//! }
//! ```

pub mod notes;
pub mod pool;
pub mod users;

// Re-export core types
pub use jot_core::*;

pub use notes::PgNoteRepository;
pub use pool::{create_pool, create_pool_with_config, PoolConfig};
pub use users::PgUserRepository;

/// Aggregate handle over the connection pool and the repositories.
///
/// Constructed once at startup and passed into whatever needs persistence;
/// closed explicitly at shutdown. There is no ambient singleton.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Note repository for owner-scoped CRUD.
    pub notes: PgNoteRepository,
    /// User account repository.
    pub users: PgUserRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            notes: PgNoteRepository::new(pool.clone()),
            users: PgUserRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
