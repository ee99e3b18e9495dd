use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::ServerConfig;
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(config: ServerConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("SolarSite page server starting up");
    debug!("Static directory: {}", config.static_dir.display());
    debug!("Bind address: {}", config.bind_address);

    // Create router
    trace!("Creating application router");
    let app = create_router(AppState::new(&config.static_dir));
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", config.bind_address);
    trace!("Attempting to bind TCP listener to {}", config.bind_address);
    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("SolarSite running on http://{}", config.bind_address);
    debug!("Server is ready to accept connections");

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
