use std::sync::Arc;

use axum::extract::{Json, State};

use crate::data_uri::DataUri;
use crate::models::{EnhanceImageRequest, EnhancedImagePayload};
use crate::prompts;

use super::{ApiError, AppState};

/// Runs one enhancement round-trip: build the instruction text for the
/// requested mode, forward the image, and hand the edited result back as a
/// data URI. One outbound call per invocation, one terminal outcome.
pub async fn enhance_image(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<EnhanceImageRequest>,
) -> Result<Json<EnhancedImagePayload>, ApiError> {
    let client = state.client.as_ref().ok_or(ApiError::MissingApiKey)?;

    let source = DataUri::parse(&payload.image)?;
    let prompt = prompts::build_prompt(payload.mode, payload.upscale);

    tracing::info!(
        mode = ?payload.mode,
        upscale = ?payload.upscale,
        mime_type = %source.mime_type,
        "requesting image enhancement"
    );

    let edited = client.edit_image(&prompt, source.into()).await?;

    let image = DataUri {
        mime_type: edited.mime_type,
        data: edited.data,
    }
    .to_string();

    Ok(Json(EnhancedImagePayload {
        image,
        commentary: edited.commentary,
    }))
}
