use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use tracing::info;

use stash_types::{MessageInput, StoredMessage};

use crate::error::AppError;
use crate::state::AppState;

/// `POST /message` body: JSON or form-encoded. Any other (or no) content type
/// is read as an empty submission.
#[derive(Debug)]
pub struct MessageBody(pub MessageInput);

impl<S> FromRequest<S> for MessageBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(input) = Json::<MessageInput>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(input))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(input) = Form::<MessageInput>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(input))
        } else {
            Ok(Self(MessageInput::default()))
        }
    }
}

/// POST /message — store `msg` (or the placeholder) and return every stored
/// message.
pub async fn post_message(
    State(state): State<AppState>,
    MessageBody(input): MessageBody,
) -> Result<Json<Vec<StoredMessage>>, AppError> {
    let content = input.content();

    let messages = state
        .store
        .store_message(&content)
        .await
        .map_err(AppError::StoreMessage)?;

    info!("Stored message; {} messages total", messages.len());
    Ok(Json(messages))
}
