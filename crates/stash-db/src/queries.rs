use sqlx::PgConnection;

use stash_types::{StoredFile, StoredMessage};

use crate::error::{DbError, Result};
use crate::models::{FileRow, MessageRow};
use crate::schema;

// -- Files --

pub async fn insert_file(conn: &mut PgConnection, filename: &str, contents: &[u8]) -> Result<i32> {
    schema::ensure_files(conn).await?;

    sqlx::query_scalar::<_, i32>(
        "INSERT INTO files (filename, file_data) VALUES ($1, $2) RETURNING id",
    )
    .bind(filename)
    .bind(contents)
    .fetch_one(&mut *conn)
    .await
    .map_err(|source| DbError::Query { op: "insert file", source })
}

pub async fn select_file(conn: &mut PgConnection, filename: &str) -> Result<Option<StoredFile>> {
    schema::ensure_files(conn).await?;

    let row = sqlx::query_as::<_, FileRow>(
        "SELECT id, filename, file_data FROM files WHERE filename = $1 ORDER BY id LIMIT 1",
    )
    .bind(filename)
    .fetch_optional(&mut *conn)
    .await
    .map_err(|source| DbError::Query { op: "select file", source })?;

    Ok(row.map(Into::into))
}

// -- Messages --

/// Insert one message, then return the whole table in id order.
pub async fn insert_message(conn: &mut PgConnection, content: &str) -> Result<Vec<StoredMessage>> {
    schema::ensure_messages(conn).await?;

    sqlx::query("INSERT INTO messages (content) VALUES ($1)")
        .bind(content)
        .execute(&mut *conn)
        .await
        .map_err(|source| DbError::Query { op: "insert message", source })?;

    select_messages(conn).await
}

pub async fn list_messages(conn: &mut PgConnection) -> Result<Vec<StoredMessage>> {
    schema::ensure_messages(conn).await?;
    select_messages(conn).await
}

async fn select_messages(conn: &mut PgConnection) -> Result<Vec<StoredMessage>> {
    let rows = sqlx::query_as::<_, MessageRow>("SELECT id, content FROM messages ORDER BY id")
        .fetch_all(&mut *conn)
        .await
        .map_err(|source| DbError::Query { op: "list messages", source })?;

    Ok(rows.into_iter().map(Into::into).collect())
}
