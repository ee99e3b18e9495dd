use yew::prelude::*;

/// Inline spinner, used inside buttons and badges
#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <span class="loading loading-spinner loading-sm"></span>
    }
}
