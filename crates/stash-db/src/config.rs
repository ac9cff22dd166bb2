use sqlx::postgres::PgConnectOptions;

/// Postgres port; not configurable.
pub const DB_PORT: u16 = 5432;

const DEFAULT_HOST: &str = "db";
const DEFAULT_USER: &str = "user";
const DEFAULT_PASSWORD: &str = "pass";
const DEFAULT_DATABASE: &str = "mydatabase";

/// Connection descriptor. Built once at startup and copied into every
/// connection attempt; nothing here is checked until a connect happens.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}

impl DbConfig {
    /// Read `DATABASE_HOST`, `DATABASE_USER`, `DATABASE_PASSWORD` and
    /// `DATABASE_NAME` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            host: get("DATABASE_HOST", DEFAULT_HOST),
            user: get("DATABASE_USER", DEFAULT_USER),
            password: get("DATABASE_PASSWORD", DEFAULT_PASSWORD),
            database: get("DATABASE_NAME", DEFAULT_DATABASE),
            port: DB_PORT,
        }
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("port", &self.port)
            .finish()
    }
}
