use std::sync::Arc;

use stash_db::Store;

use crate::staging::Staging;

/// Shared application state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub staging: Arc<Staging>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, staging: Staging) -> Self {
        Self {
            store,
            staging: Arc::new(staging),
        }
    }
}
