use async_trait::async_trait;
use common::error::Result;
use common::{
    ModelInfo, PredictionClient, PredictionError, PredictionInput, PredictionResponse,
    ServiceEndpoint, ServiceReply, ServiceStatus,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, trace, warn};

use crate::config::ClientConfig;

/// reqwest-backed client for the prediction service
pub struct HttpPredictionClient {
    endpoint: ServiceEndpoint,
    client: reqwest::Client,
}

impl HttpPredictionClient {
    pub fn new(config: &ClientConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    async fn get_json<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("GET request to: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            error!("GET {} - Request failed: {}", url, e);
            PredictionError::Transport(e.to_string())
        })?;

        if !response.status().is_success() {
            let error_msg = format!("HTTP error: {}", response.status());
            warn!("GET {} - {}", url, error_msg);
            return Err(PredictionError::Domain(error_msg));
        }

        trace!("GET {} - Response received, parsing JSON", url);
        response.json::<T>().await.map_err(|e| decode_error(url, e))
    }
}

fn decode_error(url: &str, e: reqwest::Error) -> PredictionError {
    // A body that stops arriving is still a transport problem.
    if e.is_timeout() {
        error!("{} - Timed out reading response: {}", url, e);
        return PredictionError::Transport(e.to_string());
    }
    error!("{} - Failed to parse response: {}", url, e);
    PredictionError::Decode(e.to_string())
}

#[async_trait(?Send)]
impl PredictionClient for HttpPredictionClient {
    fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    async fn predict(&self, input: &PredictionInput) -> Result<ServiceReply> {
        let url = self.endpoint.predict_url();
        debug!("POST request to: {}", url);

        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(|e| {
                error!("POST {} - Request failed: {}", url, e);
                PredictionError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("POST {} - Non-OK response: {}", url, status);
        }

        trace!("POST {} - Response received, parsing JSON", url);
        let body: PredictionResponse = response.json().await.map_err(|e| decode_error(&url, e))?;

        info!("POST {} - {}", url, status);
        Ok(ServiceReply::new(status.as_u16(), body))
    }

    async fn health(&self) -> Result<ServiceStatus> {
        self.get_json(&self.endpoint.health_url()).await
    }

    async fn model_info(&self) -> Result<ModelInfo> {
        self.get_json(&self.endpoint.model_info_url()).await
    }
}
