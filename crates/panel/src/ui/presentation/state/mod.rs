//! Presentation state containers
//!
//! Provided once by the app root via `use_context_provider`.

mod panel_state;

pub use panel_state::PanelState;
