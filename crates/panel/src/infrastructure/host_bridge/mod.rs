//! Host message bridge
//!
//! Delivers `HostMessage`s from the embedding client to a callback:
//! - WASM: `message` events posted to `window` by the game client
//! - Desktop: newline-delimited JSON on stdin, for driving the panel by hand
//!
//! Malformed messages are logged and dropped here; the callback only ever
//! sees decoded messages.

use thiserror::Error;

use identity_shared::HostMessage;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::{listen_for_host_messages, HostListener};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{listen_for_host_messages, HostListener};

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("No browser window available")]
    NoWindow,

    #[error("Failed to register host message listener: {0}")]
    Listener(String),
}

/// Decode one host message, logging and discarding it if malformed.
pub fn decode_host_message(text: &str) -> Option<HostMessage> {
    match HostMessage::from_json(text) {
        Ok(message) => Some(message),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed host message");
            None
        }
    }
}
