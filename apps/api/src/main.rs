mod chat;
mod config;
mod content;
mod errors;
mod llm_client;
mod models;
mod planner;
mod reels;
mod routes;
mod state;
mod stores;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{ChatBackend, OpenAiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting InstaCraft API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (optional)
    let llm: Option<Arc<dyn ChatBackend>> = match &config.openai_api_key {
        Some(key) => {
            let client = OpenAiClient::new(key.clone(), config.openai_model.clone())?;
            info!("LLM client initialized (model: {})", client.model());
            let backend: Arc<dyn ChatBackend> = Arc::new(client);
            Some(backend)
        }
        None => {
            warn!("OPENAI_API_KEY not set; /api/chat and /api/generate-reels will fail");
            None
        }
    };

    info!(
        "Planner tuning: preset chance {}, double secondary chance {}",
        config.plan_tuning.preset_apply_probability,
        config.plan_tuning.double_secondary_probability
    );

    // Load stores and build app state
    let state = AppState::load(config.clone(), llm).await?;
    info!("Data directory: {}", config.data_dir.display());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the UI has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
