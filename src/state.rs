use std::sync::Arc;

use crate::auth::TokenService;
use crate::store::DocumentStore;

/// Shared context handed to every handler. The store client is constructed
/// once during startup and injected here; handlers never reach for a global.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, tokens: TokenService) -> Self {
        Self { store, tokens }
    }
}
