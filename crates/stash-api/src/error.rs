use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use stash_db::DbError;

const MISSING_FILE_TEXT: &str = "No file uploaded.";
const STORE_FILE_TEXT: &str = "An error occurred while storing the file in the database.";
const STORE_MESSAGE_TEXT: &str = "An error occurred.";

/// Every way a request can fail. Clients only ever see the generic text;
/// the cause is logged here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no file field in upload request")]
    MissingFile,

    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("failed to stage upload: {0}")]
    Staging(#[from] std::io::Error),

    #[error("failed to store file: {0}")]
    StoreFile(#[source] DbError),

    #[error("failed to store message: {0}")]
    StoreMessage(#[source] DbError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFile => StatusCode::BAD_REQUEST,
            Self::Multipart(e) => e.status(),
            Self::Staging(_) | Self::StoreFile(_) | Self::StoreMessage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let text = match &self {
            Self::MissingFile => MISSING_FILE_TEXT.to_string(),
            Self::Multipart(e) => e.body_text(),
            Self::Staging(_) | Self::StoreFile(_) => STORE_FILE_TEXT.to_string(),
            Self::StoreMessage(_) => STORE_MESSAGE_TEXT.to_string(),
        };

        if status.is_server_error() {
            error!("{}", self);
        } else {
            debug!("Rejected request: {}", self);
        }

        (status, text).into_response()
    }
}
