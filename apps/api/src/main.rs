mod analysis;
mod ats;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::{Analyzer, HeuristicAnalyzer, LlmAnalyzer};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
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

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Pick the analyzer backend: AI-backed when a key is configured,
    // deterministic heuristic otherwise. The AI path always falls back to the
    // heuristic on failure, so both configurations serve every request.
    let analyzer: Arc<dyn Analyzer> = match &config.openai_api_key {
        Some(api_key) => {
            let llm = LlmClient::new(
                api_key.clone(),
                config.openai_base_url.clone(),
                config.openai_model.clone(),
            );
            info!("Analyzer: llm (model: {})", llm.model());
            Arc::new(LlmAnalyzer::new(llm))
        }
        None => {
            info!("Analyzer: heuristic (no OPENAI_API_KEY set)");
            Arc::new(HeuristicAnalyzer)
        }
    };

    let state = AppState { analyzer };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
