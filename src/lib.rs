pub mod config;
pub mod constants;
pub mod data_uri;
pub mod models;
pub mod prompts;
pub mod web;

pub use config::AppConfig;
pub use constants::{
    DEFAULT_GEMINI_ENDPOINT, DEFAULT_IMAGE_MODEL, DEFAULT_LISTEN_ADDR, MAX_BODY_BYTES,
};
pub use data_uri::{DataUri, DataUriError};
pub use models::{EnhanceImageRequest, EnhancedImagePayload, EnhancementMode, UpscaleLevel};
