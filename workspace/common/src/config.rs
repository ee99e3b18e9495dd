//! Location of the external prediction service.
//!
//! The page used to post to a literal `http://localhost:5000/predict`; the
//! literal survives only as the default base URL.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5000;

const PREDICT_PATH: &str = "/predict";
const MODEL_INFO_PATH: &str = "/model-info";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EndpointError {
    #[error("Service URL must not be empty")]
    Empty,

    #[error("Service URL '{0}' must start with http:// or https://")]
    UnsupportedScheme(String),

    #[error("Service URL '{0}' has no host")]
    MissingHost(String),
}

/// Base URL of the prediction service, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceEndpoint {
    base_url: String,
}

impl ServiceEndpoint {
    pub fn new(base_url: &str) -> Result<Self, EndpointError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(EndpointError::Empty);
        }

        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| EndpointError::UnsupportedScheme(trimmed.to_string()))?;

        if rest.is_empty() || rest.starts_with('/') || rest.starts_with(':') {
            return Err(EndpointError::MissingHost(trimmed.to_string()));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Builds an endpoint from the pieces the page settings store separately.
    pub fn from_parts(host: &str, port: u16, use_https: bool) -> Result<Self, EndpointError> {
        let protocol = if use_https { "https" } else { "http" };
        Self::new(&format!("{}://{}:{}", protocol, host.trim(), port))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_PATH)
    }

    /// The service's health check lives at the root.
    pub fn health_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    pub fn model_info_url(&self) -> String {
        format!("{}{}", self.base_url, MODEL_INFO_PATH)
    }
}

impl Default for ServiceEndpoint {
    fn default() -> Self {
        Self {
            base_url: format!("http://{}:{}", DEFAULT_HOST, DEFAULT_PORT),
        }
    }
}

impl FromStr for ServiceEndpoint {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ServiceEndpoint {
    type Error = EndpointError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ServiceEndpoint> for String {
    fn from(endpoint: ServiceEndpoint) -> Self {
        endpoint.base_url
    }
}

impl fmt::Display for ServiceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url)
    }
}
