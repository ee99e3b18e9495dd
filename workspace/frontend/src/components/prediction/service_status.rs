use common::{PredictionClient, ServiceEndpoint, ServiceStatus};
use yew::prelude::*;

use crate::api_client::GlooPredictionClient;
use crate::hooks::FetchState;
use crate::widgets::loading::Spinner;

#[derive(Properties, PartialEq)]
pub struct ServiceStatusProps {
    pub endpoint: ServiceEndpoint,
}

/// Shows whether the prediction service answers its health check
#[function_component(ServiceStatusBadge)]
pub fn service_status_badge(props: &ServiceStatusProps) -> Html {
    let fetch_state = use_state(FetchState::<ServiceStatus>::default);

    {
        let fetch_state = fetch_state.clone();
        use_effect_with(props.endpoint.clone(), move |endpoint| {
            let client = GlooPredictionClient::new(endpoint.clone());
            fetch_state.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match client.health().await {
                    Ok(status) => {
                        log::debug!("Prediction service health: {:?}", status);
                        fetch_state.set(FetchState::Success(status));
                    }
                    Err(e) => {
                        log::warn!("Prediction service health check failed: {}", e);
                        fetch_state.set(FetchState::Error(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    if fetch_state.is_loading() {
        return html! {
            <span class="badge badge-ghost gap-2"><Spinner />{"Checking service"}</span>
        };
    }

    match (fetch_state.data(), fetch_state.error()) {
        (Some(status), _) if status.is_running() => html! {
            <span class="badge badge-success gap-2" title={props.endpoint.to_string()}>
                <i class="fas fa-circle text-xs"></i>{"Service online"}
            </span>
        },
        (Some(_), _) => html! {
            <span class="badge badge-warning gap-2" title={props.endpoint.to_string()}>
                {"Service status unknown"}
            </span>
        },
        (None, Some(error)) => html! {
            <span class="badge badge-error gap-2" title={error.clone()}>
                <i class="fas fa-circle text-xs"></i>{"Service offline"}
            </span>
        },
        (None, None) => html! {},
    }
}
