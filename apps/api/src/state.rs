use std::sync::Arc;

use crate::credentials::CredentialSource;
use crate::llm_client::GenerativeBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini client in production; swapped for fakes in tests.
    pub llm: Arc<dyn GenerativeBackend>,
    /// Consulted on every generation request, never cached.
    pub credentials: Arc<dyn CredentialSource>,
}
