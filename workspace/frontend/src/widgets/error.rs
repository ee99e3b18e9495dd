use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: String,
}

/// Error area of the prediction form
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="alert alert-error mt-4" id="predictionError" role="alert">
            <i class="fas fa-exclamation-circle text-2xl"></i>
            <div class="flex flex-col gap-1">
                <span class="font-semibold">{"Prediction unavailable"}</span>
                <span class="text-sm" id="errorMessage">{&props.message}</span>
            </div>
        </div>
    }
}
