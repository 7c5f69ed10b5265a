//! Requests sent to the identity backend
//!
//! Both are `POST` with a JSON body to `https://<resource>/<endpoint>`. The
//! panel does not read the responses.

use serde::{Deserialize, Serialize};

use identity_domain::Registration;

/// Resource name of the identity backend inside the game client
pub const DEFAULT_RESOURCE_NAME: &str = "esx_identity";

/// Identity backend endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityEndpoint {
    /// Sent once when the panel mounts
    Ready,
    /// Sent with a validated registration
    Register,
}

impl IdentityEndpoint {
    /// Path segment appended to the resource URL.
    pub fn path(&self) -> &'static str {
        match self {
            IdentityEndpoint::Ready => "ready",
            IdentityEndpoint::Register => "register",
        }
    }
}

/// Readiness ping; serializes to `{}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyRequest {}

/// Registration payload in the backend's field naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    /// `DD/MM/YYYY`
    pub dateofbirth: String,
    pub height: i32,
    /// `"m"` or `"f"`
    pub sex: String,
}

impl From<&Registration> for RegisterRequest {
    fn from(registration: &Registration) -> Self {
        Self {
            firstname: registration.first_name.clone(),
            lastname: registration.last_name.clone(),
            dateofbirth: registration.date_of_birth_dmy(),
            height: registration.height,
            sex: registration.gender.code().to_string(),
        }
    }
}

impl From<Registration> for RegisterRequest {
    fn from(registration: Registration) -> Self {
        Self::from(&registration)
    }
}
