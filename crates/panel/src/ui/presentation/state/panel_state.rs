//! Registration panel state
//!
//! Wraps the domain `RegistrationPanel` in a signal so every reducer call
//! re-renders the components that read it.

use dioxus::prelude::*;
use identity_domain::RegistrationPanel;
use identity_shared::HostMessage;

use crate::presentation::handlers::apply_host_message;

/// Reactive handle to the panel; cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct PanelState {
    pub panel: Signal<RegistrationPanel>,
}

impl PanelState {
    /// Create a new PanelState: hidden, default configuration
    pub fn new() -> Self {
        Self {
            panel: Signal::new(RegistrationPanel::default()),
        }
    }

    /// Apply an inbound host message
    pub fn dispatch(&mut self, message: HostMessage) {
        apply_host_message(&mut self.panel.write(), message);
    }

    /// Run a reducer against the panel
    pub fn update(&mut self, reducer: impl FnOnce(&mut RegistrationPanel)) {
        reducer(&mut self.panel.write());
    }

    pub fn is_visible(&self) -> bool {
        self.panel.read().is_visible()
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}
