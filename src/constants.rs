pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Upper bound for request bodies. Uploads arrive base64-encoded, so this
/// sits well above the default JSON extractor limit.
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;
