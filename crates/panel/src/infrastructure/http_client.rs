//! HTTP adapter for the identity backend
//!
//! Desktop builds use `reqwest`; WASM builds use `gloo-net` so the request goes
//! through the embedding browser's `fetch`, which is where the game client
//! intercepts `https://<resource>/...` calls.

use serde_json::Value;
use url::Url;

use identity_shared::IdentityEndpoint;

use crate::ports::outbound::{BackendError, IdentityBackendPort};

/// POSTs JSON bodies to `<base>/<endpoint>`
#[derive(Clone)]
pub struct IdentityHttpClient {
    base: Url,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl IdentityHttpClient {
    /// Create a client rooted at `base_url` (e.g. `https://esx_identity/`).
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base = Url::parse(&base_url).map_err(|e| BackendError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            base,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        })
    }

    /// Absolute URL for `endpoint`.
    pub fn endpoint_url(&self, endpoint: IdentityEndpoint) -> Result<Url, BackendError> {
        self.base
            .join(endpoint.path())
            .map_err(|e| BackendError::InvalidUrl(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl IdentityBackendPort for IdentityHttpClient {
    async fn post_json(
        &self,
        endpoint: IdentityEndpoint,
        body: &Value,
    ) -> Result<(), BackendError> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(url = %url, "POST identity backend");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl IdentityBackendPort for IdentityHttpClient {
    async fn post_json(
        &self,
        endpoint: IdentityEndpoint,
        body: &Value,
    ) -> Result<(), BackendError> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(url = %url, "POST identity backend");

        let response = gloo_net::http::Request::post(url.as_str())
            .json(body)
            .map_err(|e| BackendError::RequestFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| BackendError::RequestFailed(e.to_string()))?;

        if !response.ok() {
            return Err(BackendError::Status(response.status()));
        }
        Ok(())
    }
}
