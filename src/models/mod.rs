//! Persistence row types and infrastructure models.

pub mod auth;
pub mod client;
pub mod config;
