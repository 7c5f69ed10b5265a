//! Handlers that translate inbound events into presentation state changes

mod host_message_handler;

pub use host_message_handler::apply_host_message;
