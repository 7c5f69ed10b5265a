//! Identity backend port - object-safe HTTP boundary
//!
//! The panel only ever POSTs JSON to two fixed endpoints and ignores the
//! response body, so the port is a single method keyed by endpoint.

use serde_json::Value;
use thiserror::Error;

use identity_shared::IdentityEndpoint;

/// Failures at the identity backend boundary.
///
/// These never reach the player; callers log them and move on.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Backend responded with HTTP {0}")]
    Status(u16),
}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait IdentityBackendPort: Send + Sync {
    /// POST `body` as JSON to `endpoint`. Succeeds on any 2xx response.
    async fn post_json(&self, endpoint: IdentityEndpoint, body: &Value)
        -> Result<(), BackendError>;
}
