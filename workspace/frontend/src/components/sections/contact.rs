use yew::prelude::*;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">{"Get in touch"}</h2>
                <ul class="space-y-2">
                    <li><i class="fas fa-envelope w-5"></i>{" hello@example.com"}</li>
                    <li>
                        <a class="link" href="https://github.com/" target="_blank">
                            <i class="fab fa-github w-5"></i>{" GitHub"}
                        </a>
                    </li>
                    <li>
                        <a class="link" href="https://www.linkedin.com/" target="_blank">
                            <i class="fab fa-linkedin w-5"></i>{" LinkedIn"}
                        </a>
                    </li>
                </ul>
            </div>
        </div>
    }
}
