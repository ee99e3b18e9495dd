use crate::handlers::health::health_check;
use crate::schemas::AppState;
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create the page router: health check plus the built page, with unknown
/// paths falling back to index.html
pub fn create_router(state: AppState) -> Router {
    let page = ServeDir::new(&state.static_dir).fallback(ServeFile::new(state.index_file()));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Built page and its assets
        .fallback_service(page)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
