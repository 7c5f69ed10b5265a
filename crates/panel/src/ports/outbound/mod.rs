//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to talk to the identity backend without
//! depending on a concrete HTTP client.

pub mod identity_port;

pub use identity_port::{BackendError, IdentityBackendPort};

#[cfg(test)]
pub use identity_port::MockIdentityBackendPort;
