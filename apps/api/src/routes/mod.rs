pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_generate;
use crate::preview::handlers::handle_preview;
use crate::state::AppState;

/// Preview bodies carry the generated portfolio back, inline `heroImage` data
/// URL included; a 4K avatar is several megabytes once base64 encoded.
const PREVIEW_BODY_LIMIT_BYTES: usize = 32 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/portfolios/generate", post(handle_generate))
        .route(
            "/api/v1/portfolios/preview",
            post(handle_preview).layer(DefaultBodyLimit::max(PREVIEW_BODY_LIMIT_BYTES)),
        )
        .with_state(state)
}
