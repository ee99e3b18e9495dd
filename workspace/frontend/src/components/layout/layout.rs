use yew::prelude::*;
use super::navbar::Navbar;
use crate::components::sections::SectionLink;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub links: &'static [SectionLink],
    pub active: Option<AttrValue>,
    pub on_navigate: Callback<String>,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar
                links={props.links}
                active={props.active.clone()}
                on_navigate={props.on_navigate.clone()}
            />
            <main class="flex-1 p-6 max-w-5xl w-full mx-auto">
                { for props.children.iter() }
            </main>
            <footer class="footer footer-center p-4 text-base-content/60 text-sm">
                {"Built with Rust, Yew and WebAssembly"}
            </footer>
        </div>
    }
}
