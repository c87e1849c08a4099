//! HTTP request handlers.

pub mod greetings;

use std::sync::Arc;

use db::GreetingStore;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway for the greetings table.
    pub store: Arc<dyn GreetingStore>,
}
