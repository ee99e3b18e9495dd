pub mod endpoint_settings;
pub mod form;
pub mod result;
pub mod service_status;

pub use endpoint_settings::EndpointSettings;
pub use form::PredictionPanel;
pub use result::ResultCard;
pub use service_status::ServiceStatusBadge;
