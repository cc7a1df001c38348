pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::errors::AppError;
use crate::review::handlers;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("The requested resource was not found".to_string())
}

/// Replaces axum's empty 405 body with the JSON error envelope, keeping `Allow`.
async fn method_not_allowed_body(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }
    let allow = response.headers().get(header::ALLOW).cloned();
    let mut replaced = AppError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        replaced.headers_mut().insert(header::ALLOW, allow);
    }
    replaced
}

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/debug/cors", get(health::cors_debug_handler))
        // Review API
        .route("/analyze", post(handlers::handle_analyze))
        .route("/analyze-overall", post(handlers::handle_analyze_overall))
        .route("/improve-section", post(handlers::handle_improve_section))
        // Fixed sample documents for frontend development
        .route("/test-format", get(handlers::handle_test_format))
        .route(
            "/test-section-improvement",
            get(handlers::handle_test_section_improvement),
        )
        .fallback(not_found)
        .layer(middleware::map_response(method_not_allowed_body))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

/// CORS policy for the configured origins. A `*` entry allows any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {origin:?}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
