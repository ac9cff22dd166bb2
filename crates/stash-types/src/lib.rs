pub mod api;
pub mod models;

pub use api::{DEFAULT_MESSAGE, MessageInput, MessageValue, UploadReceipt};
pub use models::{StoredFile, StoredMessage};
