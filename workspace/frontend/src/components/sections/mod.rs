use yew::prelude::*;

pub mod contact;
pub mod profile;
pub mod projects;

pub use contact::Contact;
pub use profile::Profile;
pub use projects::Projects;

/// Nav link for one page section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLink {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

pub const PREDICT_SECTION: &str = "predict";

pub const SECTION_LINKS: &[SectionLink] = &[
    SectionLink { id: "profile", title: "Profile", icon: "fas fa-user" },
    SectionLink { id: "projects", title: "Projects", icon: "fas fa-diagram-project" },
    SectionLink { id: PREDICT_SECTION, title: "Predict", icon: "fas fa-sun" },
    SectionLink { id: "contact", title: "Contact", icon: "fas fa-envelope" },
];

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    pub visible: bool,
    pub children: Children,
}

/// Page section; hidden sections stay in the DOM with `display: none`
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let style = if props.visible { "display: block" } else { "display: none" };
    html! {
        <section id={props.id.clone()} class="section" {style}>
            { for props.children.iter() }
        </section>
    }
}
