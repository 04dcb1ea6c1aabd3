use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;
use thiserror::Error;

use genai::InlineData;

/// A `data:<mime>;base64,<payload>` string split into its parts.
///
/// This is the self-describing carrier for image bytes on both sides of the
/// service boundary: uploads arrive as data URIs and enhanced results go
/// back out as data URIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Error)]
pub enum DataUriError {
    #[error("expected a 'data:' prefix")]
    MissingScheme,
    #[error("missing the ',' separating header and payload")]
    MissingPayload,
    #[error("only base64-encoded data URIs are supported")]
    NotBase64,
    #[error("missing a MIME type")]
    MissingMimeType,
    #[error("payload is empty")]
    EmptyPayload,
    #[error("payload is not valid base64: {0}")]
    InvalidPayload(#[from] base64::DecodeError),
}

impl DataUri {
    /// Splits a data URI into MIME type and base64 payload. Malformed input
    /// is rejected up front rather than extracting garbage and shipping a
    /// corrupt request.
    pub fn parse(input: &str) -> Result<Self, DataUriError> {
        let rest = input
            .strip_prefix("data:")
            .ok_or(DataUriError::MissingScheme)?;

        let (header, payload) = rest.split_once(',').ok_or(DataUriError::MissingPayload)?;

        let mime_type = header
            .strip_suffix(";base64")
            .ok_or(DataUriError::NotBase64)?;
        if mime_type.is_empty() {
            return Err(DataUriError::MissingMimeType);
        }

        if payload.is_empty() {
            return Err(DataUriError::EmptyPayload);
        }
        BASE64_ENGINE.decode(payload)?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: payload.to_string(),
        })
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.data)
    }
}

impl From<DataUri> for InlineData {
    fn from(uri: DataUri) -> Self {
        InlineData {
            mime_type: uri.mime_type,
            data: uri.data,
        }
    }
}
