//! Document identifiers.
//!
//! Every persisted entity is keyed by a [`DocId`]: 12 bytes rendered as 24
//! lowercase hex characters. The first 4 bytes are a big-endian Unix
//! timestamp, the remaining 8 are random, so ids generated on the same
//! instance sort by creation second. Parsing accepts hex of either case and
//! normalizes to lowercase; anything that is not exactly 24 hex characters
//! is rejected.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Number of hex characters in a rendered document id.
pub const DOC_ID_LEN: usize = 24;

/// Opaque 24-hex document identifier.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(transparent)]
#[serde(try_from = "String", into = "String")]
pub struct DocId(String);

impl DocId {
    /// Generate a fresh id: 4-byte big-endian Unix timestamp + 8 random bytes.
    pub fn new() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..].copy_from_slice(&rand::random::<[u8; 8]>());

        DocId(hex::encode(bytes))
    }

    /// Parse an id from its 24-hex string form.
    ///
    /// Accepts either case, stores lowercase. Returns [`Error::InvalidId`]
    /// for any other input.
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s.len() != DOC_ID_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidId(s.to_string()));
        }
        Ok(DocId(s.to_ascii_lowercase()))
    }

    /// The id as its canonical lowercase hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DocId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DocId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocId::parse(s)
    }
}

impl TryFrom<String> for DocId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        DocId::parse(&s)
    }
}

impl From<DocId> for String {
    fn from(id: DocId) -> Self {
        id.0
    }
}
