use crate::constants::{DEFAULT_GEMINI_ENDPOINT, DEFAULT_IMAGE_MODEL, DEFAULT_LISTEN_ADDR};

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const ENDPOINT_ENV: &str = "GEMINI_ENDPOINT";
pub const MODEL_ENV: &str = "GEMINI_IMAGE_MODEL";
pub const LISTEN_ADDR_ENV: &str = "LUMINA_LISTEN_ADDR";

/// Runtime configuration, resolved from the environment once at startup and
/// passed by reference afterwards.
///
/// A missing API key does not prevent startup; enhancement requests are
/// rejected before any network attempt until one is configured.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub listen_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env_value(API_KEY_ENV),
            endpoint: env_value(ENDPOINT_ENV)
                .unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.to_string()),
            model: env_value(MODEL_ENV).unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            listen_addr: env_value(LISTEN_ADDR_ENV)
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
        }
    }
}

// Empty and whitespace-only values count as unset.
fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
