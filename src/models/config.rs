//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    pub secret: String,
    /// External sign-in page users are sent to when no session is present.
    pub auth_service_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
}
