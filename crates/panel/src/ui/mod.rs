use dioxus::prelude::*;
use std::rc::Rc;

use crate::infrastructure::{listen_for_host_messages, spawn_task};

pub mod presentation;

use presentation::components::RegistrationForm;
use presentation::services::use_registration_service;
use presentation::state::PanelState;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Must be created inside an active Dioxus runtime.
    let mut panel_state = use_context_provider(PanelState::new);
    let registration = use_registration_service();

    // Host bridge stays registered for the lifetime of the root.
    use_hook(move || {
        let listener = listen_for_host_messages(move |message| {
            tracing::debug!(kind = message.kind(), "Host message received");
            panel_state.dispatch(message);
        });
        match listener {
            Ok(listener) => Rc::new(Some(listener)),
            Err(e) => {
                tracing::error!(error = %e, "Host message bridge unavailable");
                Rc::new(None)
            }
        }
    });

    // Readiness ping, once per mount.
    use_hook(move || {
        spawn_task(async move {
            if let Err(e) = registration.announce_ready().await {
                tracing::warn!(error = %e, "Ready signal failed");
            }
        });
    });

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/output.css"),
        }

        if panel_state.is_visible() {
            RegistrationForm {}
        }
    }
}
