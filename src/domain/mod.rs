//! Domain entities and derived values used across the service layer.

pub mod client;
pub mod stats;
