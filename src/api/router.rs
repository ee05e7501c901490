use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{AppState, create_appointment, method_not_allowed, preflight};

/// Permissive CORS: any origin, POST/OPTIONS, Content-Type
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Creates the API router
///
/// - POST /appointments - Create an appointment
/// - OPTIONS /appointments - Preflight
/// - any other method on /appointments - 405
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route(
            "/appointments",
            post(create_appointment)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
