//! Identity Panel crate.
//!
//! The character-registration NUI: Dioxus UI, application services, and the
//! infrastructure adapters for the host message bridge and the identity
//! backend. Web and desktop targets are selected at compile time via `cfg`.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use ui::app;
