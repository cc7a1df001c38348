use axum::{extract::State, http::HeaderMap, Json};
use serde_json::{json, Map, Value};

use crate::llm_client::MODEL;
use crate::state::AppState;

/// GET /health
/// Returns a status object with service version, backing model and config checks.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let (status, api_key) = if state.service.api_key_configured {
        ("ok", "ok")
    } else {
        ("warning", "missing")
    };
    Json(json!({
        "status": status,
        "message": "Resume review API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-review",
        "model": MODEL,
        "environment": state.service.environment,
        "checks": {
            "api_key": api_key
        }
    }))
}

/// GET /debug/cors
/// Echoes the request origin against the configured allow list.
pub async fn cors_debug_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Value> {
    let origin = headers
        .get("origin")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("No origin header");
    let allowed = &state.service.cors_origins;
    let is_allowed = allowed.iter().any(|o| o == "*" || o == origin);

    let request_headers: Map<String, Value> = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.to_string(), Value::from(v)))
        })
        .collect();

    Json(json!({
        "status": "success",
        "message": "CORS debug information",
        "origin_header": origin,
        "allowed_origins": allowed,
        "is_allowed": is_allowed,
        "request_headers": request_headers
    }))
}
