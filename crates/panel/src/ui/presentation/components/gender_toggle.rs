//! Gender Toggle - two mutually exclusive buttons

use dioxus::prelude::*;
use identity_domain::Gender;

const OPTIONS: [Gender; 2] = [Gender::Male, Gender::Female];

/// Props for GenderToggle
#[derive(Props, Clone, PartialEq)]
pub struct GenderToggleProps {
    pub selected: Option<Gender>,
    pub on_select: EventHandler<Gender>,
}

#[component]
pub fn GenderToggle(props: GenderToggleProps) -> Element {
    rsx! {
        div {
            class: "flex space-x-4",
            for gender in OPTIONS {
                button {
                    key: "{gender}",
                    r#type: "button",
                    class: button_class(gender, props.selected == Some(gender)),
                    onclick: move |_| props.on_select.call(gender),
                    span { "{gender}" }
                }
            }
        }
    }
}

fn button_class(gender: Gender, active: bool) -> &'static str {
    match (gender, active) {
        (Gender::Male, true) => {
            "flex-1 py-3.5 px-4 rounded-2xl border bg-fivem-accent border-fivem-accent text-white shadow-lg"
        }
        (Gender::Female, true) => {
            "flex-1 py-3.5 px-4 rounded-2xl border bg-fivem-female border-fivem-female text-white shadow-lg"
        }
        (_, false) => {
            "flex-1 py-3.5 px-4 rounded-2xl border bg-white/5 border-white/10 text-gray-300 hover:bg-white/10"
        }
    }
}
