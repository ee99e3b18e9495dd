use common::SectionNavigator;
use yew::prelude::*;

use crate::components::sections::SectionLink;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub links: &'static [SectionLink],
    pub active: Option<AttrValue>,
    pub on_navigate: Callback<String>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let items = props.links.iter().map(|link| {
        let is_active = props.active.as_deref() == Some(link.id);
        let onclick = {
            let on_navigate = props.on_navigate.clone();
            let id = link.id;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                log::debug!("Nav link clicked: {}", id);
                on_navigate.emit(id.to_string());
            })
        };

        html! {
            <li key={link.id}>
                <a
                    href={SectionNavigator::href(link.id)}
                    class={classes!("nav-link", is_active.then_some("active"))}
                    {onclick}
                >
                    <i class={classes!(link.icon, "w-5")}></i>
                    {" "}{link.title}
                </a>
            </li>
        }
    });

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4">
                <span class="text-xl font-bold tracking-tight">
                    <i class="fas fa-solar-panel text-primary"></i>{" SolarSite"}
                </span>
            </div>
            <div class="flex-none">
                <ul class="menu menu-horizontal px-1">
                    { for items }
                </ul>
            </div>
        </div>
    }
}
