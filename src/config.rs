use common::{EndpointError, ServiceEndpoint};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_STATIC_DIR: &str = "dist";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid prediction API URL: {0}")]
    Endpoint(#[from] EndpointError),

    #[error("Request timeout must be at least one second")]
    ZeroTimeout,
}

/// Load variables from a `.env` file, if there is one
pub fn load_environment() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Failed to read .env file: {}", e),
    }
}

/// Where and how to reach the prediction service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: ServiceEndpoint,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_url: &str, timeout_secs: u64) -> Result<Self, ConfigError> {
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self {
            endpoint: ServiceEndpoint::new(api_url)?,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: ServiceEndpoint::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Page server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn new(bind_address: &str, static_dir: &str) -> Self {
        let static_dir = PathBuf::from(static_dir);
        if !static_dir.join("index.html").is_file() {
            warn!(
                "No index.html in {}; build the frontend first (trunk build --release)",
                static_dir.display()
            );
        }
        Self {
            bind_address: bind_address.to_string(),
            static_dir,
        }
    }
}
