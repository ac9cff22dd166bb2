use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::pin::pin;

use axum::body::Bytes;
use futures_util::{Stream, StreamExt};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::error::AppError;

/// Give up after this many same-millisecond name collisions.
const MAX_NAME_ATTEMPTS: i64 = 1000;

/// An upload written to the staging directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub path: PathBuf,
    /// Generated name: millisecond timestamp plus the original extension.
    pub filename: String,
}

/// Local directory where uploads land before their bytes go to the database.
pub struct Staging {
    dir: PathBuf,
}

impl Staging {
    pub async fn new(dir: PathBuf) -> std::io::Result<Self> {
        fs::create_dir_all(&dir).await?;
        info!("Upload staging directory: {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stream `chunks` into a new file named after the current time and the
    /// extension of `original_name`. A partially written file is removed.
    pub async fn stage<S, E>(&self, original_name: &str, chunks: S) -> Result<StagedFile, AppError>
    where
        S: Stream<Item = Result<Bytes, E>>,
        AppError: From<E>,
    {
        let ext = extension_of(original_name);
        let (mut file, staged) = self.create_unique(&ext).await?;

        let mut chunks = pin!(chunks);
        let mut written: u64 = 0;
        let outcome: Result<(), AppError> = async {
            while let Some(chunk) = chunks.next().await {
                let chunk = chunk?;
                file.write_all(&chunk).await?;
                written += chunk.len() as u64;
            }
            file.flush().await?;
            Ok(())
        }
        .await;

        if let Err(e) = outcome {
            drop(file);
            self.discard(&staged).await;
            return Err(e);
        }

        debug!("Staged {} ({} bytes)", staged.path.display(), written);
        Ok(staged)
    }

    /// Read a staged upload back into memory.
    pub async fn read(&self, staged: &StagedFile) -> std::io::Result<Vec<u8>> {
        fs::read(&staged.path).await
    }

    /// Remove a staged upload. A file that is already gone is not an error.
    pub async fn discard(&self, staged: &StagedFile) {
        match fs::remove_file(&staged.path).await {
            Ok(()) => debug!("Removed staged file {}", staged.path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Staged file {} already gone", staged.path.display())
            }
            Err(e) => warn!("Failed to remove staged file {}: {}", staged.path.display(), e),
        }
    }

    async fn create_unique(&self, ext: &str) -> std::io::Result<(fs::File, StagedFile)> {
        let now = chrono::Utc::now().timestamp_millis();

        for bump in 0..MAX_NAME_ATTEMPTS {
            let filename = format!("{}{}", now + bump, ext);
            let path = self.dir.join(&filename);
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => return Ok((file, StagedFile { path, filename })),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            }
        }

        Err(std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("no free staging name near {} in {}", now, self.dir.display()),
        ))
    }
}

/// Extension of `name` including the leading dot, or empty. Dotfiles such as
/// `.env` have no extension.
fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default()
}
