//! Registration Form - the whole visible panel
//!
//! Only mounted while the panel is visible. Field edits go straight through
//! the domain reducers, so the inputs always show sanitized values.

use dioxus::prelude::*;
use identity_domain::Gender;

use crate::infrastructure::spawn_task;
use crate::presentation::components::{DateOfBirthPicker, GenderToggle};
use crate::presentation::services::use_registration_service;
use crate::presentation::state::PanelState;

const LABEL_CLASS: &str = "block text-sm font-medium text-gray-300";
const INPUT_CLASS: &str = "w-full px-4 py-3.5 bg-white/5 border border-white/10 rounded-2xl text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-fivem-accent hover:bg-white/10";

#[component]
pub fn RegistrationForm() -> Element {
    let mut state = use_context::<PanelState>();
    let registration = use_registration_service();

    let (form, config) = {
        let panel = state.panel.read();
        (panel.form().clone(), panel.config().clone())
    };
    let first_name = form.first_name;
    let last_name = form.last_name;
    let height = form.height;
    let height_placeholder = format!("Height ({}-{}cm)", config.min_height, config.max_height);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        // Refusals are logged by the service and otherwise silent
        let Ok(request) = registration.prepare(&state.panel.read()) else {
            return;
        };

        let svc = registration.clone();
        spawn_task(async move {
            if let Err(e) = svc.register(&request).await {
                tracing::warn!(error = %e, "Registration request failed");
            }
        });
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-black/30",
            div {
                class: "bg-panel p-10 rounded-3xl w-full max-w-md border border-white/10",

                // Header
                div {
                    class: "text-center mb-8",
                    div {
                        class: "inline-flex items-center px-3 py-1.5 rounded-full bg-fivem-accent/10 border border-fivem-accent/20 mb-4",
                        span { class: "text-xs font-medium text-fivem-accent", "REGISTRATION" }
                    }
                    h1 {
                        class: "text-2xl font-semibold text-white tracking-tight",
                        "Character Registration"
                    }
                    p {
                        class: "mt-2 text-gray-400 text-sm",
                        "Please fill in your character details below"
                    }
                }

                form {
                    class: "space-y-7",
                    onsubmit: submit,

                    // First name
                    div {
                        class: "space-y-2.5",
                        label { class: LABEL_CLASS, "First Name" }
                        input {
                            r#type: "text",
                            name: "firstName",
                            value: "{first_name}",
                            placeholder: "Enter your first name",
                            class: INPUT_CLASS,
                            oninput: move |e| state.update(|p| p.edit_first_name(&e.value())),
                        }
                    }

                    // Last name
                    div {
                        class: "space-y-2.5",
                        label { class: LABEL_CLASS, "Last Name" }
                        input {
                            r#type: "text",
                            name: "lastName",
                            value: "{last_name}",
                            placeholder: "Enter your last name",
                            class: INPUT_CLASS,
                            oninput: move |e| state.update(|p| p.edit_last_name(&e.value())),
                        }
                    }

                    // Date of birth
                    div {
                        class: "space-y-2.5",
                        label { class: LABEL_CLASS, "Date of Birth" }
                        DateOfBirthPicker {}
                    }

                    // Height
                    div {
                        class: "space-y-2.5",
                        label { class: LABEL_CLASS, "Height (CM)" }
                        input {
                            r#type: "number",
                            name: "height",
                            value: "{height}",
                            placeholder: "{height_placeholder}",
                            class: INPUT_CLASS,
                            oninput: move |e| state.update(|p| p.edit_height(&e.value())),
                        }
                    }

                    // Gender
                    div {
                        class: "space-y-2.5",
                        label { class: LABEL_CLASS, "Gender" }
                        GenderToggle {
                            selected: form.gender,
                            on_select: move |gender: Gender| state.update(|p| p.choose_gender(gender)),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "w-full py-3.5 px-4 bg-fivem-accent text-white rounded-2xl font-medium hover:bg-blue-600 shadow-lg",
                        "Register Character"
                    }
                }
            }
        }
    }
}
