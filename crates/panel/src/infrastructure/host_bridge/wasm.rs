//! Browser `message` event listener

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;

use identity_shared::HostMessage;

use super::{decode_host_message, BridgeError};

/// Keeps the `message` listener registered; removes it when dropped
pub struct HostListener {
    window: web_sys::Window,
    closure: Closure<dyn FnMut(MessageEvent)>,
}

impl Drop for HostListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("message", self.closure.as_ref().unchecked_ref());
    }
}

/// Register `on_message` for every host message posted to `window`.
pub fn listen_for_host_messages<F>(mut on_message: F) -> Result<HostListener, BridgeError>
where
    F: FnMut(HostMessage) + 'static,
{
    let window = web_sys::window().ok_or(BridgeError::NoWindow)?;

    let closure = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        // Round-trip through JSON text so numbers decode as integers
        let text = match js_sys::JSON::stringify(&event.data()) {
            Ok(text) => match text.as_string() {
                Some(text) => text,
                None => return,
            },
            Err(e) => {
                tracing::warn!(error = ?e, "Host message is not JSON-serializable");
                return;
            }
        };
        if let Some(message) = decode_host_message(&text) {
            on_message(message);
        }
    });

    window
        .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        .map_err(|e| BridgeError::Listener(format!("{e:?}")))?;

    Ok(HostListener { window, closure })
}
