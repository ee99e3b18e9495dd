use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Directory holding the built page (index.html, wasm bundle, assets)
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_dir: static_dir.into(),
        }
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the built page is present ("available" or "missing")
    pub page: String,
}
