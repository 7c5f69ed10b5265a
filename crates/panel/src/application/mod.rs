//! Application layer - use cases that sit between the UI and the ports

pub mod services;
