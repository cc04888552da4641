//! # Routes
//!
//! Axum router configuration for the checkout gateway.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - POST /create-payflex-checkout - Initiate a Payflex checkout session
/// - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/create-payflex-checkout",
            post(handlers::create_payflex_checkout),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
