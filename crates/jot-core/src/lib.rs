//! # jot-core
//!
//! Core types, traits, and abstractions for the jot note service.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the other jot crates depend on: the domain models, the 24-hex document
//! identifier, the error taxonomy, and the repository interfaces.

pub mod error;
pub mod id;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use id::DocId;
pub use models::{Note, User, UserWithNotes};
pub use traits::{
    CreateNoteRequest, CreateUserRequest, NoteRepository, ReplaceNoteRequest, UserRepository,
};
