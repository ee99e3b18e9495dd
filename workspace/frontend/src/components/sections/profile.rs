use yew::prelude::*;

#[function_component(Profile)]
pub fn profile() -> Html {
    html! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title text-3xl">{"Machine Learning Engineer"}</h2>
                <p class="text-base-content/70">
                    {"I build data pipelines and forecasting models for solar energy analytics: \
                      from synthetic weather generation and feature preparation to model \
                      evaluation and serving predictions over HTTP."}
                </p>
                <div class="flex flex-wrap gap-2 mt-4">
                    { for ["Rust", "Python", "scikit-learn", "Random Forests", "REST APIs", "WebAssembly"]
                        .iter()
                        .map(|skill| html! { <span class="badge badge-outline">{*skill}</span> }) }
                </div>
            </div>
        </div>
    }
}
