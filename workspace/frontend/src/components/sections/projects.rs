use yew::prelude::*;

struct Project {
    title: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Intelligent Solar Energy Analytics",
        summary: "Predicts solar irradiance (W/m²) from temperature, cloud cover, humidity, \
                  hour and month with a Random Forest regressor served over a JSON API.",
        tags: &["regression", "feature scaling", "model serving"],
    },
    Project {
        title: "Baseline Model Comparison",
        summary: "Linear regression, decision tree and random forest baselines evaluated with \
                  MAE, RMSE and R² on a held-out split.",
        tags: &["evaluation", "metrics"],
    },
    Project {
        title: "Weather Data Generation",
        summary: "Seasonal, diurnal and cloud-driven synthetic weather series used to train \
                  and stress-test the irradiance model.",
        tags: &["data", "simulation"],
    },
];

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <div class="grid gap-6 md:grid-cols-2">
            { for PROJECTS.iter().map(|project| html! {
                <div class="card bg-base-100 shadow" key={project.title}>
                    <div class="card-body">
                        <h3 class="card-title">{project.title}</h3>
                        <p class="text-sm text-base-content/70">{project.summary}</p>
                        <div class="card-actions justify-end">
                            { for project.tags.iter().map(|tag| html! {
                                <span class="badge badge-primary badge-outline">{*tag}</span>
                            }) }
                        </div>
                    </div>
                </div>
            }) }
        </div>
    }
}
