//! Pets Explorer web service
//!
//! Server-rendered listing and detail pages over the dog and cat breed
//! providers.

pub mod handlers;
pub mod render;
pub mod state;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;

pub use state::AppState;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "pets-explorer";

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/breed/:species/:id", get(handlers::breed_detail))
        .route("/api/suggestions", get(handlers::suggestions))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(ServiceBuilder::new().into_inner())
}
