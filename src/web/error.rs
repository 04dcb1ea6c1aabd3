use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use genai::GeminiError;

use crate::data_uri::DataUriError;

/// Structured error response body for the page.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping. Every variant leaves the page
/// in an actionable state; nothing here is retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API key is missing")]
    MissingApiKey,
    #[error("invalid image: {0}")]
    InvalidImage(#[from] DataUriError),
    #[error(transparent)]
    Enhance(#[from] GeminiError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::MissingApiKey => (
                StatusCode::SERVICE_UNAVAILABLE,
                "API_KEY_MISSING",
                "API key is missing. Set the GEMINI_API_KEY environment variable.".to_string(),
            ),
            ApiError::InvalidImage(err) => (
                StatusCode::BAD_REQUEST,
                "INVALID_IMAGE",
                format!("The uploaded image could not be read: {err}"),
            ),
            // Generic on purpose: the model's text goes to the operator log,
            // not to the user.
            ApiError::Enhance(GeminiError::TextOnly { .. }) => (
                StatusCode::BAD_GATEWAY,
                "MODEL_RETURNED_TEXT",
                "The AI returned text instead of an image. Please try a different image or mode."
                    .to_string(),
            ),
            ApiError::Enhance(GeminiError::Empty) => (
                StatusCode::BAD_GATEWAY,
                "NO_IMAGE_GENERATED",
                "Failed to generate image.".to_string(),
            ),
            ApiError::Enhance(err) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                format!("Failed to request image enhancement: {err}"),
            ),
        };

        (status, Json(ErrorBody {
            error: ErrorDetail { code, message },
        }))
            .into_response()
    }
}
