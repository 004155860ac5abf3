//! Password hashing and verification — Argon2id.
//!
//! [`hash_password`] generates a random salt, hashes with the default
//! Argon2id parameters, and returns a PHC-format string (e.g.
//! `$argon2id$v=19$m=19456,t=2,p=1$...`) which is what lands in the
//! `password_hash` column. [`verify_password`] checks a plaintext candidate
//! against such a string. The raw password never leaves this module's
//! callers' stack frames.
//!
//! Both functions are CPU-bound; handlers call them through
//! `tokio::task::spawn_blocking`.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use jot_core::Error;

/// Hash a password with Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Internal(format!("password hashing failed: {e}")))
}

/// Verify a password against a PHC-format hash string.
///
/// `Ok(false)` on mismatch; `Err` only when the stored hash is malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| Error::Internal(format!("stored password hash malformed: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
