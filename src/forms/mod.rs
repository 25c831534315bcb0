//! HTML form payloads submitted by the dashboard.

pub mod client;
pub mod main;
