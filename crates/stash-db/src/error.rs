use thiserror::Error;

/// Failures of the persistence gateway. Each variant keeps the driver error
/// so callers can log the real cause.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to connect to {host}:{port}/{database}: {source}")]
    Connect {
        host: String,
        port: u16,
        database: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to ensure table `{table}` exists: {source}")]
    Schema {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("{op} failed: {source}")]
    Query {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

pub type Result<T> = std::result::Result<T, DbError>;
