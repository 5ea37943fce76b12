use std::sync::Arc;

use crate::authentication::ApiKeyStore;

pub struct AppState {
    /// Service name from the setup config, echoed in responses
    pub name: String,
    /// The store every guarded request is checked against
    pub key_store: Arc<dyn ApiKeyStore>,
}

impl AppState {
    pub fn new(name: impl Into<String>, key_store: Arc<dyn ApiKeyStore>) -> Self {
        Self { name: name.into(), key_store }
    }
}
