//! HTTP request handlers.

pub mod login;
pub mod notes;
pub mod users;
