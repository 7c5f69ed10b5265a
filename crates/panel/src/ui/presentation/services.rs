//! Service providers for the presentation layer
//!
//! Components use these hooks to reach application services without
//! depending on infrastructure adapter types.

use dioxus::prelude::*;

use crate::application::services::RegistrationService;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub registration: RegistrationService,
}

impl Services {
    pub fn new(registration: RegistrationService) -> Self {
        Self { registration }
    }
}

/// Hook to access the RegistrationService from context
pub fn use_registration_service() -> RegistrationService {
    let services = use_context::<Services>();
    services.registration.clone()
}
