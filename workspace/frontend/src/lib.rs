use common::navigator::DEFAULT_SECTION;
use common::{SectionNavigator, ServiceEndpoint};
use yew::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod settings;
pub mod widgets;

use components::layout::layout::Layout;
use components::prediction::{EndpointSettings, PredictionPanel};
use components::sections::{Contact, Profile, Projects, Section, PREDICT_SECTION, SECTION_LINKS};

fn initial_navigator() -> SectionNavigator {
    let mut navigator =
        SectionNavigator::new(SECTION_LINKS.iter().map(|link| link.id), DEFAULT_SECTION);

    // Deep links such as `/#predict` open on that section
    if let Some(hash) = web_sys::window().and_then(|w| w.location().hash().ok()) {
        if !hash.is_empty() {
            navigator.activate(&hash);
        }
    }

    navigator
}

#[function_component(App)]
pub fn app() -> Html {
    let navigator = use_state(initial_navigator);
    let endpoint = use_state(|| settings::get_settings().endpoint());

    let on_navigate = {
        let navigator = navigator.clone();
        Callback::from(move |id: String| {
            let mut next = (*navigator).clone();
            if next.activate(&id) {
                navigator.set(next);
            }
        })
    };

    let on_endpoint_change = {
        let endpoint = endpoint.clone();
        Callback::from(move |next: ServiceEndpoint| {
            log::info!("Prediction service set to {}", next);
            endpoint.set(next);
        })
    };

    let active = navigator.active().map(|id| AttrValue::from(id.to_string()));

    html! {
        <Layout links={SECTION_LINKS} {active} {on_navigate}>
            <Section id="profile" visible={navigator.is_visible("profile")}>
                <Profile />
            </Section>
            <Section id="projects" visible={navigator.is_visible("projects")}>
                <Projects />
            </Section>
            <Section id={PREDICT_SECTION} visible={navigator.is_visible(PREDICT_SECTION)}>
                <PredictionPanel endpoint={(*endpoint).clone()} />
                <EndpointSettings on_change={on_endpoint_change} />
            </Section>
            <Section id="contact" visible={navigator.is_visible("contact")}>
                <Contact />
            </Section>
        </Layout>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Solarsite Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Prediction service: {}", settings.endpoint());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
