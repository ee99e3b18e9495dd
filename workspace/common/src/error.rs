use thiserror::Error;

use crate::config::ServiceEndpoint;

/// Message shown when the service declined a prediction without saying why.
pub const FALLBACK_ERROR_MESSAGE: &str = "Prediction failed";

/// A form field that could not be turned into a usable prediction input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// The field was left empty
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// The field is not a finite number
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    /// The field must be a whole number
    #[error("{field} must be a whole number, got '{value}'")]
    NotAnInteger { field: &'static str, value: String },

    /// The field is numeric but outside the range the model was trained on
    #[error("{message}")]
    OutOfRange { field: &'static str, message: String },
}

impl InputError {
    /// Name of the offending form field.
    pub fn field(&self) -> &'static str {
        match self {
            InputError::Missing { field }
            | InputError::NotANumber { field, .. }
            | InputError::NotAnInteger { field, .. }
            | InputError::OutOfRange { field, .. } => field,
        }
    }
}

/// Error types for a prediction submission
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// The HTTP exchange could not be completed at all
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered but declined to produce a prediction
    #[error("Domain error: {0}")]
    Domain(String),

    /// The service answered with a body that is not a prediction response
    #[error("Decode error: {0}")]
    Decode(String),

    /// The form was rejected before anything was sent
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

impl PredictionError {
    /// Builds a domain error from the service's optional `error` field.
    pub fn domain(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
        PredictionError::Domain(message)
    }

    /// Text rendered in the error area for this failure.
    pub fn user_message(&self, endpoint: &ServiceEndpoint) -> String {
        match self {
            // An unreadable body is reported like an unreachable service.
            PredictionError::Transport(_) | PredictionError::Decode(_) => format!(
                "Unable to connect to prediction service. \
                 Make sure the prediction API is running at {}",
                endpoint.base_url()
            ),
            PredictionError::Domain(message) => message.clone(),
            PredictionError::InvalidInput(input) => input.to_string(),
        }
    }
}

/// Type alias for Result with PredictionError
pub type Result<T> = std::result::Result<T, PredictionError>;
