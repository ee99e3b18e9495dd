use anyhow::{bail, Context, Result};
use common::{
    PredictionClient, PredictionForm, PredictionView, PredictionWorkflow, RenderedPrediction,
    SubmitOutcome,
};
use tracing::{debug, info, trace};

use crate::client::HttpPredictionClient;
use crate::config::ClientConfig;
use crate::terminal::TerminalView;

pub async fn predict(config: ClientConfig, form: PredictionForm) -> Result<()> {
    trace!("Entering predict function");
    debug!("Prediction service: {}", config.endpoint);

    let client = HttpPredictionClient::new(&config).context("Failed to build HTTP client")?;
    let prediction = run_prediction(client, TerminalView::stdout(), &form).await?;

    info!(
        "Prediction completed: {} ({})",
        prediction.value_text,
        prediction.interpretation.label()
    );
    Ok(())
}

/// Drive a single submission through the workflow and turn its outcome into
/// a `Result` for the command line.
pub async fn run_prediction<C, V>(
    client: C,
    view: V,
    form: &PredictionForm,
) -> Result<RenderedPrediction>
where
    C: PredictionClient,
    V: PredictionView,
{
    let workflow = PredictionWorkflow::new(client, view);
    match workflow.submit(form).await {
        SubmitOutcome::Succeeded(prediction) => Ok(prediction),
        SubmitOutcome::Failed(err) => Err(err).context("Prediction did not succeed"),
        SubmitOutcome::Ignored => bail!("Another prediction is already in flight"),
    }
}
