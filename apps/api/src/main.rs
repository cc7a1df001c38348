mod config;
mod errors;
mod llm_client;
mod pdf;
mod review;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::review::pipeline::ReviewPipeline;
use crate::routes::{build_router, cors_layer};
use crate::state::{AppState, ServiceInfo};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume review API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize generation backend
    let gemini = GeminiClient::new(
        config.google_api_key.clone(),
        config.gemini_api_base.clone(),
        Duration::from_secs(config.generation_timeout_secs),
    )?;
    info!(
        "Gemini client initialized (model: {}, timeout: {}s)",
        llm_client::MODEL,
        config.generation_timeout_secs
    );

    let state = AppState {
        pipeline: ReviewPipeline::new(Arc::new(gemini)),
        service: Arc::new(ServiceInfo::from_config(&config)),
    };

    info!("CORS origins: {}", config.cors_origins.join(", "));

    let app = build_router(state, config.max_upload_bytes).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.cors_origins)),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
