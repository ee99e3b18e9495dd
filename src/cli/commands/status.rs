use anyhow::{Context, Result};
use common::{ModelInfo, PredictionClient, ServiceStatus};
use tracing::{debug, info, trace, warn};

use crate::client::HttpPredictionClient;
use crate::config::ClientConfig;

pub async fn status(config: ClientConfig) -> Result<()> {
    trace!("Entering status function");
    let client = HttpPredictionClient::new(&config).context("Failed to build HTTP client")?;
    let report = service_report(&client).await?;
    println!("{}", report);
    Ok(())
}

/// Query health and model info; a missing model-info endpoint is not fatal.
pub async fn service_report<C: PredictionClient>(client: &C) -> Result<String> {
    let endpoint = client.endpoint();
    let health = client
        .health()
        .await
        .with_context(|| format!("Prediction service unreachable at {}", endpoint))?;
    debug!("Health check response: {:?}", health);

    let model = match client.model_info().await {
        Ok(info) => Some(info),
        Err(e) => {
            warn!("Model info unavailable: {}", e);
            None
        }
    };

    info!("Prediction service at {} answered", endpoint);
    Ok(describe(endpoint.base_url(), &health, model.as_ref()))
}

fn describe(base_url: &str, health: &ServiceStatus, model: Option<&ModelInfo>) -> String {
    let or_unknown = |v: &Option<String>| v.clone().unwrap_or_else(|| "unknown".to_string());

    let mut lines = vec![
        format!("Service:  {}", or_unknown(&health.service)),
        format!("Endpoint: {}", base_url),
        format!("Status:   {}", or_unknown(&health.status)),
        format!("Version:  {}", or_unknown(&health.version)),
    ];

    match model {
        Some(info) => {
            lines.push(format!(
                "Model:    {}{}",
                info.model_type
                    .clone()
                    .or_else(|| health.model.clone())
                    .unwrap_or_else(|| "unknown".to_string()),
                info.n_estimators
                    .map(|n| format!(" ({} estimators)", n))
                    .unwrap_or_default()
            ));
            if !info.features.is_empty() {
                lines.push(format!("Features: {}", info.features.join(", ")));
            }
            if let (Some(target), Some(unit)) = (&info.target, &info.unit) {
                lines.push(format!("Target:   {} [{}]", target, unit));
            }
        }
        None => lines.push(format!("Model:    {}", or_unknown(&health.model))),
    }

    lines.join("\n")
}
