use common::config::{DEFAULT_HOST, DEFAULT_PORT};
use common::ServiceEndpoint;
use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

const KEY_API_HOST: &str = "solarsite_api_host";
const KEY_API_PORT: &str = "solarsite_api_port";
const KEY_API_USE_HTTPS: &str = "solarsite_api_use_https";
const KEY_LOG_LEVEL: &str = "solarsite_log_level";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Prediction service host (e.g., "localhost" or "solar.example.com")
    pub api_host: String,

    /// Prediction service port (e.g., 5000)
    pub api_port: u16,

    /// Use HTTPS for prediction requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_HOST.to_string(),
            api_port: DEFAULT_PORT,
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        // Detect if running in development mode
        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // Try to read from localStorage for custom settings
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(api_host)) = storage.get_item(KEY_API_HOST) {
                if !api_host.trim().is_empty() {
                    settings.api_host = api_host;
                }
            }

            if let Ok(Some(api_port)) = storage.get_item(KEY_API_PORT) {
                if let Ok(port_val) = api_port.parse::<u16>() {
                    settings.api_port = port_val;
                }
            }

            if let Ok(Some(use_https)) = storage.get_item(KEY_API_USE_HTTPS) {
                settings.api_use_https = use_https.to_lowercase() == "true";
            }

            if let Ok(Some(log_level)) = storage.get_item(KEY_LOG_LEVEL) {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item(KEY_API_HOST, &self.api_host)?;
                storage.set_item(KEY_API_PORT, &self.api_port.to_string())?;
                storage.set_item(KEY_API_USE_HTTPS, &self.api_use_https.to_string())?;
                storage.set_item(KEY_LOG_LEVEL, &format!("{:?}", self.log_level).to_lowercase())?;
            }
        }
        Ok(())
    }

    /// Prediction service endpoint; bad stored values fall back to the default
    pub fn endpoint(&self) -> ServiceEndpoint {
        ServiceEndpoint::from_parts(&self.api_host, self.api_port, self.api_use_https)
            .unwrap_or_else(|e| {
                log::warn!("Ignoring stored prediction service address: {}", e);
                ServiceEndpoint::default()
            })
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
