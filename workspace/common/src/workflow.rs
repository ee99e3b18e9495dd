//! Submission lifecycle of the prediction form.
//!
//! [`PredictionWorkflow`] owns nothing platform specific: the HTTP client and
//! the output areas are injected through [`PredictionClient`] and
//! [`PredictionView`], so the same state machine drives the browser page and
//! the terminal.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use tracing::{debug, error, info, instrument, trace, warn};

use crate::config::ServiceEndpoint;
use crate::error::{PredictionError, Result};
use crate::interpretation::RenderedPrediction;
use crate::prediction::{ModelInfo, PredictionForm, PredictionInput, ServiceReply, ServiceStatus};

pub const IDLE_LABEL: &str = "Predict Solar Irradiance";
pub const BUSY_LABEL: &str = "Predicting...";

/// HTTP access to the prediction service.
///
/// `predict` returns `Ok` for any reply whose body decodes, whatever its
/// HTTP status; connection-level failures are [`PredictionError::Transport`]
/// and undecodable bodies are [`PredictionError::Decode`].
#[async_trait(?Send)]
pub trait PredictionClient {
    fn endpoint(&self) -> &ServiceEndpoint;

    async fn predict(&self, input: &PredictionInput) -> Result<ServiceReply>;

    async fn health(&self) -> Result<ServiceStatus>;

    async fn model_info(&self) -> Result<ModelInfo>;
}

/// Output sinks owned by one form: result area, error area and submit control.
pub trait PredictionView {
    /// Hide both the result area and the error area.
    fn clear(&self);

    fn show_result(&self, prediction: &RenderedPrediction);

    fn show_error(&self, message: &str);

    fn set_submit_control(&self, control: &SubmitControl);
}

impl<T: PredictionView + ?Sized> PredictionView for &T {
    fn clear(&self) {
        (**self).clear()
    }

    fn show_result(&self, prediction: &RenderedPrediction) {
        (**self).show_result(prediction)
    }

    fn show_error(&self, message: &str) {
        (**self).show_error(message)
    }

    fn set_submit_control(&self, control: &SubmitControl) {
        (**self).set_submit_control(control)
    }
}

impl<T: PredictionView + ?Sized> PredictionView for Rc<T> {
    fn clear(&self) {
        (**self).clear()
    }

    fn show_result(&self, prediction: &RenderedPrediction) {
        (**self).show_result(prediction)
    }

    fn show_error(&self, message: &str) {
        (**self).show_error(message)
    }

    fn set_submit_control(&self, control: &SubmitControl) {
        (**self).set_submit_control(control)
    }
}

/// Visual state of the submit button.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub enabled: bool,
    pub opacity: f32,
}

impl SubmitControl {
    pub fn idle() -> Self {
        Self {
            label: IDLE_LABEL,
            enabled: true,
            opacity: 1.0,
        }
    }

    pub fn busy() -> Self {
        Self {
            label: BUSY_LABEL,
            enabled: false,
            opacity: 0.6,
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::idle()
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::idle()
    }
}

/// What the form currently shows. Only one outcome is ever visible.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    InFlight,
    Success(RenderedPrediction),
    Error(String),
}

impl UiState {
    pub fn result(&self) -> Option<&RenderedPrediction> {
        match self {
            UiState::Success(prediction) => Some(prediction),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Result of one call to [`PredictionWorkflow::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Succeeded(RenderedPrediction),
    Failed(PredictionError),
    /// Another submission was still in flight; nothing happened.
    Ignored,
}

/// Restores the submit control when a submission ends, on every exit path.
struct InFlightGuard<'a, V: PredictionView> {
    view: &'a V,
    in_flight: &'a Cell<bool>,
}

impl<V: PredictionView> Drop for InFlightGuard<'_, V> {
    fn drop(&mut self) {
        trace!("Restoring submit control");
        self.view.set_submit_control(&SubmitControl::idle());
        self.in_flight.set(false);
    }
}

pub struct PredictionWorkflow<C, V> {
    client: C,
    view: V,
    in_flight: Cell<bool>,
    state: RefCell<UiState>,
}

impl<C, V> PredictionWorkflow<C, V>
where
    C: PredictionClient,
    V: PredictionView,
{
    pub fn new(client: C, view: V) -> Self {
        Self {
            client,
            view,
            in_flight: Cell::new(false),
            state: RefCell::new(UiState::Idle),
        }
    }

    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Runs one submission of `form` to completion.
    ///
    /// A second call while the first is still awaiting the service returns
    /// [`SubmitOutcome::Ignored`] without touching the view.
    #[instrument(skip_all, fields(endpoint = %self.client.endpoint()))]
    pub async fn submit(&self, form: &PredictionForm) -> SubmitOutcome {
        if self.in_flight.replace(true) {
            warn!("Prediction already in flight, ignoring submit");
            return SubmitOutcome::Ignored;
        }
        let _guard = InFlightGuard {
            view: &self.view,
            in_flight: &self.in_flight,
        };

        self.view.clear();
        self.set_state(UiState::InFlight);
        self.view.set_submit_control(&SubmitControl::busy());

        match self.request(form).await {
            Ok(irradiance) => {
                let prediction = RenderedPrediction::new(irradiance);
                info!(
                    irradiance,
                    interpretation = prediction.interpretation.label(),
                    "Prediction received"
                );
                self.view.show_result(&prediction);
                self.set_state(UiState::Success(prediction.clone()));
                SubmitOutcome::Succeeded(prediction)
            }
            Err(err) => {
                let message = err.user_message(self.client.endpoint());
                match &err {
                    PredictionError::InvalidInput(_) => warn!("Rejected form input: {}", err),
                    _ => error!("Prediction failed: {}", err),
                }
                self.view.show_error(&message);
                self.set_state(UiState::Error(message));
                SubmitOutcome::Failed(err)
            }
        }
    }

    async fn request(&self, form: &PredictionForm) -> Result<f64> {
        let input = form.parse()?;
        debug!(?input, "Sending prediction request");
        let reply = self.client.predict(&input).await?;
        trace!(status = reply.http_status, body = ?reply.body, "Prediction reply received");
        reply.into_irradiance()
    }

    fn set_state(&self, state: UiState) {
        *self.state.borrow_mut() = state;
    }
}
