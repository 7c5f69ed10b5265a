//! Registration service for talking to the identity backend
//!
//! Wraps the identity backend port. Validation is synchronous and happens in
//! the event handler; the resulting request is then sent fire-and-forget.

use std::sync::Arc;

use identity_domain::{RegistrationError, RegistrationPanel};
use identity_shared::{IdentityEndpoint, ReadyRequest, RegisterRequest};

use crate::ports::outbound::{BackendError, IdentityBackendPort};

/// Service for the panel's two outbound calls
#[derive(Clone)]
pub struct RegistrationService {
    backend: Arc<dyn IdentityBackendPort>,
}

impl RegistrationService {
    /// Create a new RegistrationService with the given backend
    pub fn new(backend: Arc<dyn IdentityBackendPort>) -> Self {
        Self { backend }
    }

    /// Tell the backend the panel has mounted
    pub async fn announce_ready(&self) -> Result<(), BackendError> {
        let body = serde_json::to_value(ReadyRequest::default())?;
        self.backend.post_json(IdentityEndpoint::Ready, &body).await
    }

    /// Validate the panel for submission.
    ///
    /// A refusal is logged at debug level and returned; the player sees
    /// nothing.
    pub fn prepare(&self, panel: &RegistrationPanel) -> Result<RegisterRequest, RegistrationError> {
        match panel.submit() {
            Ok(registration) => Ok(RegisterRequest::from(registration)),
            Err(e) => {
                tracing::debug!(reason = %e, "Registration submit refused");
                Err(e)
            }
        }
    }

    /// Send a prepared registration
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), BackendError> {
        let body = serde_json::to_value(request)?;
        tracing::info!(
            firstname = %request.firstname,
            lastname = %request.lastname,
            "Submitting character registration"
        );
        self.backend.post_json(IdentityEndpoint::Register, &body).await
    }
}
