use serde::{Deserialize, Serialize};

/// Editing intent selected on the page. Each mode maps to exactly one
/// instruction template in [`crate::prompts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EnhancementMode {
    Landscape,
    Portrait,
    Product,
    Retouch,
}

/// Requested resolution-increase hint. Not a local resize: anything other
/// than `Original` only appends an instruction asking the model to simulate
/// the multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpscaleLevel {
    #[default]
    #[serde(rename = "original")]
    Original,
    #[serde(rename = "2x")]
    X2,
    #[serde(rename = "4x")]
    X4,
    #[serde(rename = "8x")]
    X8,
}

impl UpscaleLevel {
    /// Multiplier token used in the prompt hint, `None` for `Original`.
    pub fn multiplier(self) -> Option<&'static str> {
        match self {
            UpscaleLevel::Original => None,
            UpscaleLevel::X2 => Some("2x"),
            UpscaleLevel::X4 => Some("4x"),
            UpscaleLevel::X8 => Some("8x"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceImageRequest {
    /// Source image as a `data:<mime>;base64,<payload>` URI.
    pub image: String,
    pub mode: EnhancementMode,
    #[serde(default)]
    pub upscale: UpscaleLevel,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedImagePayload {
    /// Enhanced image as a data URI, ready to display.
    pub image: String,
    /// Commentary the model attached alongside the image, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
}
