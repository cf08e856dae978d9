mod config;
mod credentials;
mod errors;
mod generation;
mod llm_client;
mod models;
mod preview;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::credentials::{CredentialSource, EnvCredentialSource, CREDENTIAL_ENV_VARS};
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FolioGen API v{}", env!("CARGO_PKG_VERSION"));

    let llm = GeminiClient::new(config.gemini_api_base.clone(), config.llm_timeout_secs)?;
    info!(
        "Gemini client initialized (text: {}, image: {}, timeout: {}s)",
        llm_client::TEXT_MODEL,
        llm_client::IMAGE_MODEL,
        config.llm_timeout_secs
    );

    // The key is re-read per request; this only warns early.
    let credentials = EnvCredentialSource;
    if credentials.current().is_none() {
        warn!(
            "No API key found in {}; generation requests will fail until one is set",
            CREDENTIAL_ENV_VARS.join(" / ")
        );
    }

    let state = AppState {
        llm: Arc::new(llm),
        credentials: Arc::new(credentials),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // browser front end is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
