use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; every in-flight request holds its own clone.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. `GeminiClient` in production, a recording fake in tests.
    pub generator: Arc<dyn TextGenerator>,
}
