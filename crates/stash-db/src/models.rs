//! Database row types. Converted into `stash-types` models before they
//! leave this crate so the HTTP layer never sees `sqlx`.

use stash_types::{StoredFile, StoredMessage};

#[derive(sqlx::FromRow)]
pub struct MessageRow {
    pub id: i32,
    pub content: String,
}

#[derive(sqlx::FromRow)]
pub struct FileRow {
    pub id: i32,
    pub filename: String,
    pub file_data: Vec<u8>,
}

impl From<MessageRow> for StoredMessage {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
        }
    }
}

impl From<FileRow> for StoredFile {
    fn from(row: FileRow) -> Self {
        Self {
            id: row.id,
            filename: row.filename,
            contents: row.file_data,
        }
    }
}
