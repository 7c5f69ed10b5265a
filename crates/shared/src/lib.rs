//! Identity Panel Protocol - wire contracts around the registration panel
//!
//! - Inbound host messages (`enableui`, `setConfig`)
//! - Outbound identity backend requests (`ready`, `register`)
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, and thiserror
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod messages;
pub mod requests;

pub use messages::{HostMessage, HostMessageError};
pub use requests::{IdentityEndpoint, ReadyRequest, RegisterRequest, DEFAULT_RESOURCE_NAME};
