use common::{
    PredictionForm, PredictionView, PredictionWorkflow, RenderedPrediction, ServiceEndpoint,
    SubmitControl, UiState,
};
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use super::{ResultCard, ServiceStatusBadge};
use crate::api_client::GlooPredictionClient;
use crate::widgets::error::ErrorAlert;
use crate::widgets::loading::Spinner;

/// Yew state handles standing in for the form's output areas
struct FormView {
    ui: UseStateHandle<UiState>,
    control: UseStateHandle<SubmitControl>,
}

impl PredictionView for FormView {
    fn clear(&self) {
        self.ui.set(UiState::InFlight);
    }

    fn show_result(&self, prediction: &RenderedPrediction) {
        self.ui.set(UiState::Success(prediction.clone()));
    }

    fn show_error(&self, message: &str) {
        self.ui.set(UiState::Error(message.to_string()));
    }

    fn set_submit_control(&self, control: &SubmitControl) {
        self.control.set(control.clone());
    }
}

type Workflow = PredictionWorkflow<GlooPredictionClient, FormView>;

const HUMIDITY_OPTIONS: [u32; 8] = [20, 30, 40, 50, 60, 70, 80, 90];

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// `13` becomes `"1:00 PM"`.
fn hour_label(hour: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:00 {}", display, suffix)
}

fn read_form(form: &HtmlFormElement) -> Option<PredictionForm> {
    let form_data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to read prediction form: {:?}", e);
            return None;
        }
    };
    let field = |name: &str| form_data.get(name).as_string().unwrap_or_default();

    Some(PredictionForm {
        temperature: field("temperature"),
        cloud_cover: field("cloud_cover"),
        humidity: field("humidity"),
        hour: field("hour"),
        month: field("month"),
    })
}

#[derive(Properties, PartialEq)]
pub struct PredictionPanelProps {
    pub endpoint: ServiceEndpoint,
}

#[function_component(PredictionPanel)]
pub fn prediction_panel(props: &PredictionPanelProps) -> Html {
    let form_ref = use_node_ref();
    let ui = use_state(UiState::default);
    let control = use_state(SubmitControl::idle);

    // One workflow per endpoint; it outlives renders so its in-flight guard holds.
    let workflow: std::rc::Rc<Workflow> = {
        let view = FormView {
            ui: ui.clone(),
            control: control.clone(),
        };
        use_memo(props.endpoint.clone(), move |endpoint| {
            log::debug!("Creating prediction workflow for {}", endpoint);
            PredictionWorkflow::new(GlooPredictionClient::new(endpoint.clone()), view)
        })
    };

    let on_submit = {
        let form_ref = form_ref.clone();
        let workflow = workflow.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if workflow.is_in_flight() {
                log::debug!("Ignoring submit while a prediction is in flight");
                return;
            }

            let Some(form) = form_ref.cast::<HtmlFormElement>().as_ref().and_then(read_form) else {
                return;
            };

            let workflow = workflow.clone();
            wasm_bindgen_futures::spawn_local(async move {
                workflow.submit(&form).await;
            });
        })
    };

    let busy = !control.enabled;

    html! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">{"Solar Irradiance Prediction"}</h2>
                    <ServiceStatusBadge endpoint={props.endpoint.clone()} />
                </div>
                <p class="text-sm text-base-content/70">
                    {"Enter current weather conditions to estimate solar irradiance."}
                </p>

                <form ref={form_ref} id="predictionForm" onsubmit={on_submit} class="grid gap-4 md:grid-cols-2 mt-4">
                    <label class="form-control">
                        <span class="label-text">{"Temperature (°C)"}</span>
                        <input id="temperature" name="temperature" type="number" step="0.1" min="-10" max="50"
                            class="input input-bordered" placeholder="e.g. 28.5" required={true} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Cloud cover (%)"}</span>
                        <input id="cloud_cover" name="cloud_cover" type="number" step="1" min="0" max="100"
                            class="input input-bordered" placeholder="e.g. 20" required={true} />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Humidity (%)"}</span>
                        <select id="humidity" name="humidity" class="select select-bordered">
                            { for HUMIDITY_OPTIONS.iter().map(|h| html! {
                                <option value={h.to_string()} selected={*h == 50}>{format!("{}%", h)}</option>
                            }) }
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text">{"Hour"}</span>
                        <select id="hour" name="hour" class="select select-bordered">
                            { for (0..24u32).map(|h| html! {
                                <option value={h.to_string()} selected={h == 12}>{hour_label(h)}</option>
                            }) }
                        </select>
                    </label>
                    <label class="form-control md:col-span-2">
                        <span class="label-text">{"Month"}</span>
                        <select id="month" name="month" class="select select-bordered">
                            { for MONTHS.iter().enumerate().map(|(i, name)| html! {
                                <option value={(i + 1).to_string()} selected={i == 5}>{*name}</option>
                            }) }
                        </select>
                    </label>
                    <div class="md:col-span-2">
                        <button
                            id="predictBtn"
                            type="submit"
                            class="btn btn-primary w-full"
                            disabled={busy}
                            style={format!("opacity: {}", control.opacity)}
                        >
                            if busy { <Spinner /> }
                            {control.label}
                        </button>
                    </div>
                </form>

                {match &*ui {
                    UiState::Success(prediction) => html! { <ResultCard prediction={prediction.clone()} /> },
                    UiState::Error(message) => html! { <ErrorAlert message={message.clone()} /> },
                    UiState::Idle | UiState::InFlight => html! {},
                }}
            </div>
        </div>
    }
}
