use std::net::SocketAddr;
use std::path::PathBuf;

/// The service always listens here.
pub const LISTEN_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED),
    8080,
);

const DEFAULT_UPLOAD_DIR: &str = "./uploads";
const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// HTTP-side settings. Database settings live in [`stash_db::DbConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen: SocketAddr,
    /// Staging directory for uploads.
    pub upload_dir: PathBuf,
    pub max_body_bytes: usize,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let upload_dir = lookup("UPLOAD_DIR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.into())
            .into();
        let max_body_bytes = lookup("UPLOAD_MAX_BYTES")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);

        Self {
            listen: LISTEN_ADDR,
            upload_dir,
            max_body_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ServerConfig::from_lookup(|_| None);
        assert_eq!(cfg.listen.port(), 8080);
        assert_eq!(cfg.upload_dir, PathBuf::from("./uploads"));
        assert_eq!(cfg.max_body_bytes, 50 * 1024 * 1024);
    }

    #[test]
    fn overrides_and_bad_numbers() {
        let cfg = ServerConfig::from_lookup(|k| match k {
            "UPLOAD_DIR" => Some("/srv/uploads".into()),
            "UPLOAD_MAX_BYTES" => Some("lots".into()),
            _ => None,
        });
        assert_eq!(cfg.upload_dir, PathBuf::from("/srv/uploads"));
        assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }
}
