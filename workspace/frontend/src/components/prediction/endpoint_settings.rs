use common::ServiceEndpoint;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::settings;

#[derive(Properties, PartialEq)]
pub struct EndpointSettingsProps {
    pub on_change: Callback<ServiceEndpoint>,
}

/// Lets the visitor point the form at a prediction service other than the
/// local development one. Saved to localStorage.
#[function_component(EndpointSettings)]
pub fn endpoint_settings(props: &EndpointSettingsProps) -> Html {
    let current = settings::get_settings();
    let host_ref = use_node_ref();
    let port_ref = use_node_ref();
    let https_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);

    let on_save = {
        let host_ref = host_ref.clone();
        let port_ref = port_ref.clone();
        let https_ref = https_ref.clone();
        let error_message = error_message.clone();
        let on_change = props.on_change.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(host), Some(port), Some(https)) = (
                host_ref.cast::<HtmlInputElement>(),
                port_ref.cast::<HtmlInputElement>(),
                https_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let Ok(port) = port.value().trim().parse::<u16>() else {
                error_message.set(Some("Port must be a number between 0 and 65535".to_string()));
                return;
            };

            let host = host.value();
            let use_https = https.checked();
            match ServiceEndpoint::from_parts(&host, port, use_https) {
                Ok(endpoint) => {
                    settings::update_settings(|s| {
                        s.api_host = host.trim().to_string();
                        s.api_port = port;
                        s.api_use_https = use_https;
                    });
                    if let Err(e) = settings::get_settings().save_to_storage() {
                        log::warn!("Failed to save settings: {:?}", e);
                    }
                    log::info!("Prediction service set to {}", endpoint);
                    error_message.set(None);
                    on_change.emit(endpoint);
                }
                Err(e) => error_message.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <details class="collapse collapse-arrow bg-base-200 mt-6">
            <summary class="collapse-title text-sm font-medium">{"Prediction service"}</summary>
            <div class="collapse-content">
                <form onsubmit={on_save} class="flex flex-wrap items-end gap-3">
                    <label class="form-control">
                        <span class="label-text">{"Host"}</span>
                        <input ref={host_ref} type="text" class="input input-bordered input-sm"
                            value={current.api_host.clone()} required={true} />
                    </label>
                    <label class="form-control w-28">
                        <span class="label-text">{"Port"}</span>
                        <input ref={port_ref} type="number" min="0" max="65535" class="input input-bordered input-sm"
                            value={current.api_port.to_string()} required={true} />
                    </label>
                    <label class="label cursor-pointer gap-2">
                        <input ref={https_ref} type="checkbox" class="checkbox checkbox-sm"
                            checked={current.api_use_https} />
                        <span class="label-text">{"HTTPS"}</span>
                    </label>
                    <button type="submit" class="btn btn-sm">{"Save"}</button>
                </form>
                {if let Some(error) = (*error_message).as_ref() {
                    html! { <p class="text-error text-sm mt-2">{error}</p> }
                } else {
                    html! {}
                }}
            </div>
        </details>
    }
}
