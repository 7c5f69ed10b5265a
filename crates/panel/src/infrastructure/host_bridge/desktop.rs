//! Stdin host bridge for desktop builds
//!
//! Each line is one JSON host message, e.g.
//! `{"type":"enableui","enable":true}`.

use dioxus::prelude::{spawn, Task};
use tokio::io::{AsyncBufReadExt, BufReader};

use identity_shared::HostMessage;

use super::{decode_host_message, BridgeError};

/// Keeps the stdin reader running; cancels it when dropped
pub struct HostListener {
    task: Task,
}

impl Drop for HostListener {
    fn drop(&mut self) {
        self.task.cancel();
    }
}

/// Read host messages from stdin and hand each one to `on_message`.
///
/// Must be called from inside the Dioxus runtime.
pub fn listen_for_host_messages<F>(mut on_message: F) -> Result<HostListener, BridgeError>
where
    F: FnMut(HostMessage) + 'static,
{
    let task = spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if let Some(message) = decode_host_message(&line) {
                        on_message(message);
                    }
                }
                Ok(None) => {
                    tracing::debug!("Host message input closed");
                    break;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read host message input");
                    break;
                }
            }
        }
    });

    Ok(HostListener { task })
}
