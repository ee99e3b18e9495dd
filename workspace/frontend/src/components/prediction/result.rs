use common::{Interpretation, RenderedPrediction};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub prediction: RenderedPrediction,
}

fn band_class(interpretation: Interpretation) -> &'static str {
    match interpretation {
        Interpretation::NoIrradiance => "badge-neutral",
        Interpretation::VeryLow | Interpretation::Low => "badge-warning",
        Interpretation::Moderate => "badge-info",
        Interpretation::Good | Interpretation::Excellent => "badge-success",
    }
}

/// Success area of the prediction form
#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    let prediction = &props.prediction;

    html! {
        <div class="card bg-base-200 mt-4" id="predictionResult">
            <div class="card-body items-center text-center">
                <span class="text-sm uppercase tracking-wide text-base-content/60">
                    {"Predicted solar irradiance"}
                </span>
                <span class="text-4xl font-bold" id="resultContent">{&prediction.value_text}</span>
                <span class={classes!("badge", band_class(prediction.interpretation))}>
                    {prediction.interpretation.label()}
                </span>
                <p class="text-sm mt-2" id="resultDetails">{prediction.interpretation_text()}</p>
            </div>
        </div>
    }
}
