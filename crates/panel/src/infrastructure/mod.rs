//! Infrastructure adapters: HTTP to the identity backend, host message bridge

pub mod host_bridge;
pub mod http_client;

pub use host_bridge::{listen_for_host_messages, BridgeError, HostListener};
pub use http_client::IdentityHttpClient;

/// Run `future` on the UI executor without awaiting it.
///
/// Must be called from inside the Dioxus runtime (event handlers, hooks).
pub fn spawn_task<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}
