use thiserror::Error;

/// Failures raised while requesting or decoding an image edit.
///
/// Every variant is terminal for the attempt; the caller decides whether to
/// re-trigger. `TextOnly` deliberately keeps the model's text out of its
/// `Display` output so it can be logged without leaking into user-facing
/// messages.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// The HTTP round-trip failed: connect error, non-success status, or an
    /// unreadable body.
    #[error("request to the Gemini API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered, but the body was not the expected JSON.
    #[error("failed to decode Gemini response JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The model answered with commentary instead of an edited image.
    #[error("the model returned text instead of an image")]
    TextOnly { text: String },

    /// The response carried neither an image nor any text.
    #[error("the model response contained no usable content")]
    Empty,
}
