use sqlx::PgConnection;
use tracing::debug;

use crate::error::{DbError, Result};

pub const FILES_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS files (
        id          SERIAL PRIMARY KEY,
        filename    TEXT NOT NULL,
        file_data   BYTEA NOT NULL
    )";

pub const MESSAGES_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS messages (
        id          SERIAL PRIMARY KEY,
        content     TEXT NOT NULL
    )";

/// Postgres SQLSTATEs raised when two sessions race on the same
/// `CREATE TABLE IF NOT EXISTS`: unique_violation on the catalog, duplicate_table.
const CONCURRENT_CREATE_CODES: &[&str] = &["23505", "42P07"];

pub async fn ensure_files(conn: &mut PgConnection) -> Result<()> {
    ensure(conn, "files", FILES_TABLE).await
}

pub async fn ensure_messages(conn: &mut PgConnection) -> Result<()> {
    ensure(conn, "messages", MESSAGES_TABLE).await
}

/// Issue a create-if-absent statement. Safe to call before every write.
async fn ensure(conn: &mut PgConnection, table: &'static str, ddl: &str) -> Result<()> {
    match sqlx::query(ddl).execute(&mut *conn).await {
        Ok(_) => Ok(()),
        Err(e) if lost_create_race(&e) => {
            debug!("Table {} created concurrently by another session", table);
            Ok(())
        }
        Err(source) => Err(DbError::Schema { table, source }),
    }
}

fn lost_create_race(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| CONCURRENT_CREATE_CODES.iter().any(|c| *c == code))
}
