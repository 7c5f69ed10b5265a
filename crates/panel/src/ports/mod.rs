//! Ports - boundaries between the panel and the outside world

pub mod outbound;
