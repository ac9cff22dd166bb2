use axum::extract::{Multipart, State, multipart::MultipartRejection};
use tracing::{debug, info, warn};

use stash_types::UploadReceipt;

use crate::error::AppError;
use crate::state::AppState;

/// Multipart field carrying the upload.
const FILE_FIELD: &str = "file";

/// POST /upload — stage the `file` field on disk, read it back, store it in
/// the `files` table, and confirm with the generated name and id.
///
/// The staged copy is removed once the row is written. If the insert fails it
/// stays on disk so the upload can be recovered by hand.
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<String, AppError> {
    let mut multipart = multipart.map_err(|e| {
        debug!("Upload without a multipart body: {}", e);
        AppError::MissingFile
    })?;

    let staged = loop {
        let Some(field) = multipart.next_field().await? else {
            return Err(AppError::MissingFile);
        };
        // A `file` part without a filename is a plain form value, not an upload.
        let Some(original_name) = field
            .file_name()
            .filter(|_| field.name() == Some(FILE_FIELD))
            .map(str::to_string)
        else {
            continue;
        };
        break state.staging.stage(&original_name, field).await?;
    };

    let contents = state.staging.read(&staged).await?;

    let id = match state.store.store_file(&staged.filename, &contents).await {
        Ok(id) => id,
        Err(e) => {
            warn!("Keeping staged upload {} after failed insert", staged.path.display());
            return Err(AppError::StoreFile(e));
        }
    };

    state.staging.discard(&staged).await;

    info!("Stored {} ({} bytes) as file {}", staged.filename, contents.len(), id);
    Ok(UploadReceipt {
        id,
        filename: staged.filename,
    }
    .to_string())
}
