//! Messages from the embedding game client to the panel
//!
//! ## Versioning Policy
//!
//! - Unknown `type` values deserialize to `HostMessage::Unknown` and are ignored
//! - Missing or mistyped fields on a known `type` are decode errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use identity_domain::PanelConfig;

/// Inbound host message, tagged by its `type` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostMessage {
    /// Show or hide the panel
    #[serde(rename = "enableui")]
    EnableUi { enable: bool },
    /// Replace the runtime configuration
    #[serde(rename = "setConfig")]
    SetConfig { config: PanelConfig },
    /// Any other `type`; ignored
    #[serde(other)]
    Unknown,
}

/// Failure to decode an inbound host message
#[derive(Debug, Error)]
pub enum HostMessageError {
    #[error("Malformed host message: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl HostMessage {
    /// Decode a message from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, HostMessageError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            HostMessage::EnableUi { .. } => "enableui",
            HostMessage::SetConfig { .. } => "setConfig",
            HostMessage::Unknown => "unknown",
        }
    }
}
