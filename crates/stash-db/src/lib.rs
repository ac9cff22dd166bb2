pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod schema;

use async_trait::async_trait;
use sqlx::{Connection, PgConnection};
use tracing::{debug, warn};

use stash_types::{StoredFile, StoredMessage};

pub use config::DbConfig;
pub use error::{DbError, Result};

/// Operations the HTTP layer needs from storage.
#[async_trait]
pub trait Store: Send + Sync {
    /// Persist an uploaded file and return its generated id.
    async fn store_file(&self, filename: &str, contents: &[u8]) -> Result<i32>;

    /// Persist a message and return every stored message in id order.
    async fn store_message(&self, content: &str) -> Result<Vec<StoredMessage>>;
}

/// Postgres gateway. Holds only the connection descriptor: every operation
/// opens its own connection and closes it before returning.
#[derive(Debug, Clone)]
pub struct Database {
    config: DbConfig,
}

impl Database {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }

    async fn connect(&self) -> Result<PgConnection> {
        PgConnection::connect_with(&self.config.connect_options())
            .await
            .map_err(|source| DbError::Connect {
                host: self.config.host.clone(),
                port: self.config.port,
                database: self.config.database.clone(),
                source,
            })
    }

    pub async fn list_messages(&self) -> Result<Vec<StoredMessage>> {
        let mut conn = self.connect().await?;
        let result = queries::list_messages(&mut conn).await;
        release(conn).await;
        result
    }

    /// Look up the first file stored under `filename`.
    pub async fn fetch_file(&self, filename: &str) -> Result<Option<StoredFile>> {
        let mut conn = self.connect().await?;
        let result = queries::select_file(&mut conn, filename).await;
        release(conn).await;
        result
    }
}

#[async_trait]
impl Store for Database {
    async fn store_file(&self, filename: &str, contents: &[u8]) -> Result<i32> {
        let mut conn = self.connect().await?;
        let result = queries::insert_file(&mut conn, filename, contents).await;
        release(conn).await;
        result
    }

    async fn store_message(&self, content: &str) -> Result<Vec<StoredMessage>> {
        let mut conn = self.connect().await?;
        let result = queries::insert_message(&mut conn, content).await;
        release(conn).await;
        result
    }
}

/// Close a per-request connection. Runs after the query helper regardless of
/// its outcome; a failed close never masks that outcome.
async fn release(conn: PgConnection) {
    match conn.close().await {
        Ok(()) => debug!("Database connection closed"),
        Err(e) => warn!("Failed to close database connection cleanly: {}", e),
    }
}
