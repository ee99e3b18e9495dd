//! Platform-neutral core shared by the page and the command line.
//! Wire types mirror the prediction service's request/response payloads so
//! both front ends decode replies the same way.

pub mod config;
pub mod error;
pub mod interpretation;
pub mod navigator;
pub mod prediction;
pub mod workflow;

pub use config::{EndpointError, ServiceEndpoint};
pub use error::{FALLBACK_ERROR_MESSAGE, InputError, PredictionError};
pub use interpretation::{Interpretation, RenderedPrediction, format_irradiance};
pub use navigator::{DEFAULT_SECTION, SectionNavigator};
pub use prediction::{
    FEATURE_ORDER, ModelInfo, PredictionForm, PredictionInput, PredictionResponse, ServiceReply,
    ServiceStatus,
};
pub use workflow::{
    PredictionClient, PredictionView, PredictionWorkflow, SubmitControl, SubmitOutcome, UiState,
};
