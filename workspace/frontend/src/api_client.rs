use async_trait::async_trait;
use common::error::Result;
use common::{
    ModelInfo, PredictionClient, PredictionError, PredictionInput, PredictionResponse,
    ServiceEndpoint, ServiceReply, ServiceStatus,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Browser fetch client for the prediction service
#[derive(Debug, Clone, PartialEq)]
pub struct GlooPredictionClient {
    endpoint: ServiceEndpoint,
}

impl GlooPredictionClient {
    pub fn new(endpoint: ServiceEndpoint) -> Self {
        Self { endpoint }
    }
}

/// Common GET request handler
async fn get<T>(url: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    log::debug!("GET request to: {}", url);

    let response = Request::get(url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", url, error_msg);
        PredictionError::Transport(error_msg)
    })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", url, error_msg);
        return Err(PredictionError::Domain(error_msg));
    }

    log::trace!("GET {} - Response received, parsing JSON", url);
    response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", url, error_msg);
        PredictionError::Decode(error_msg)
    })
}

#[async_trait(?Send)]
impl PredictionClient for GlooPredictionClient {
    fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    async fn predict(&self, input: &PredictionInput) -> Result<ServiceReply> {
        let url = self.endpoint.predict_url();
        log::debug!("POST request to: {}", url);

        let response = Request::post(&url)
            .json(input)
            .map_err(|e| {
                let error_msg = format!("Failed to serialize request: {}", e);
                log::error!("POST {} - {}", url, error_msg);
                PredictionError::Transport(error_msg)
            })?
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("Request failed: {}", e);
                log::error!("POST {} - {}", url, error_msg);
                PredictionError::Transport(error_msg)
            })?;

        if !response.ok() {
            log::warn!("POST {} - Non-OK response: {}", url, response.status());
        }

        log::trace!("POST {} - Response received, parsing JSON", url);
        let body: PredictionResponse = response.json().await.map_err(|e| {
            let error_msg = format!("Failed to parse response: {}", e);
            log::error!("POST {} - {}", url, error_msg);
            PredictionError::Decode(error_msg)
        })?;

        log::info!("POST {} - {}", url, response.status());
        Ok(ServiceReply::new(response.status(), body))
    }

    async fn health(&self) -> Result<ServiceStatus> {
        get(&self.endpoint.health_url()).await
    }

    async fn model_info(&self) -> Result<ModelInfo> {
        get(&self.endpoint.model_info_url()).await
    }
}
