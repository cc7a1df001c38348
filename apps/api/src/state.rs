use std::sync::Arc;

use crate::config::Config;
use crate::review::pipeline::ReviewPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Review pipeline bound to the configured generation backend.
    pub pipeline: ReviewPipeline,
    pub service: Arc<ServiceInfo>,
}

/// Deployment facts reported by the health and CORS diagnostics endpoints.
#[derive(Debug)]
pub struct ServiceInfo {
    pub environment: String,
    pub api_key_configured: bool,
    pub cors_origins: Vec<String>,
}

impl ServiceInfo {
    pub fn from_config(config: &Config) -> Self {
        Self {
            environment: config.environment.clone(),
            api_key_configured: !config.google_api_key.trim().is_empty(),
            cors_origins: config.cors_origins.clone(),
        }
    }
}
