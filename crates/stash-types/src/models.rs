use serde::{Deserialize, Serialize};

/// A row of the `messages` table, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: i32,
    pub content: String,
}

/// A row of the `files` table. Never serialized to clients; the raw bytes
/// only leave the database for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub id: i32,
    pub filename: String,
    pub contents: Vec<u8>,
}
