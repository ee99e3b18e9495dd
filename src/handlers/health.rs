use axum::{extract::State, response::Json};
use tracing::{instrument, warn};

use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let page = if state.index_file().is_file() {
        "available"
    } else {
        warn!("index.html not found in {}", state.static_dir.display());
        "missing"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        page: page.to_string(),
    })
}
