use reqwest::Client;
use serde_json::json;

use crate::error::GeminiError;
use crate::models::{GenerateContentResponse, InlineData, Part};

/// MIME type assumed when the service returns an image without one.
const FALLBACK_IMAGE_MIME: &str = "image/png";

/// Client for the Gemini `generateContent` endpoint.
///
/// Configured once at startup with the credential, endpoint, and model it
/// will use for every request; nothing is read from the environment at call
/// time.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

/// An edited image returned by the model, plus any commentary text that
/// accompanied it in the same response.
#[derive(Debug, Clone)]
pub struct EditedImage {
    pub mime_type: String,
    pub data: String,
    pub commentary: Option<String>,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one editing request: the instruction text plus the source image
    /// as inline data. Exactly one outbound call is made per invocation; no
    /// retries, no streaming.
    pub async fn edit_image(
        &self,
        prompt: &str,
        source: InlineData,
    ) -> Result<EditedImage, GeminiError> {
        let endpoint = self.endpoint.trim_end_matches('/');
        let url = format!("{}/{}:generateContent", endpoint, self.model);

        let body = json!({
            "contents": {
                "parts": [
                    { "text": prompt },
                    {
                        "inlineData": {
                            "mimeType": source.mime_type,
                            "data": source.data,
                        }
                    }
                ]
            }
        });

        let response_text = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: GenerateContentResponse = serde_json::from_str(&response_text)?;

        if let Some(usage) = &response.usage_metadata {
            tracing::debug!(
                total_tokens = usage.total_token_count,
                model_version = response.model_version.as_deref(),
                "generateContent round-trip complete"
            );
        }

        extract_edited_image(response)
    }
}

/// Walks candidates and parts in response order and returns the first
/// non-empty inline image. Text seen before the image is kept as commentary;
/// text with no image at all downgrades the response to `TextOnly`, and a
/// response with nothing usable is `Empty`.
fn extract_edited_image(response: GenerateContentResponse) -> Result<EditedImage, GeminiError> {
    let mut first_text: Option<String> = None;

    for candidate in response.candidates {
        for part in candidate.content.parts {
            match part {
                Part::Image { inline_data } => {
                    let data = inline_data.data.trim();
                    if data.is_empty() {
                        continue;
                    }

                    let mime_type = inline_data.mime_type.trim();
                    let mime_type = if mime_type.is_empty() {
                        FALLBACK_IMAGE_MIME
                    } else {
                        mime_type
                    };

                    return Ok(EditedImage {
                        mime_type: mime_type.to_string(),
                        data: data.to_string(),
                        commentary: first_text,
                    });
                }
                Part::Text { text } => {
                    let trimmed = text.trim();
                    if first_text.is_none() && !trimmed.is_empty() {
                        first_text = Some(trimmed.to_string());
                    }
                }
                Part::Other(_) => {}
            }
        }
    }

    match first_text {
        Some(text) => {
            tracing::warn!(model_text = %text, "model returned text instead of an image");
            Err(GeminiError::TextOnly { text })
        }
        None => Err(GeminiError::Empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Candidate, Content};

    fn image_part(mime_type: &str, data: &str) -> Part {
        Part::Image {
            inline_data: InlineData {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            },
        }
    }

    fn text_part(text: &str) -> Part {
        Part::Text {
            text: text.to_string(),
        }
    }

    fn response_with_parts(parts: Vec<Part>) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content { parts, role: None },
                finish_reason: None,
                index: None,
            }],
            usage_metadata: None,
            model_version: None,
            response_id: None,
        }
    }

    #[test]
    fn first_inline_image_wins() {
        let response = response_with_parts(vec![
            image_part("image/png", "FIRST"),
            image_part("image/jpeg", "SECOND"),
        ]);

        let edited = extract_edited_image(response).unwrap();
        assert_eq!(edited.mime_type, "image/png");
        assert_eq!(edited.data, "FIRST");
        assert!(edited.commentary.is_none());
    }

    #[test]
    fn text_before_image_becomes_commentary() {
        let response = response_with_parts(vec![
            text_part("Softened the highlights."),
            image_part("image/png", "XYZ"),
        ]);

        let edited = extract_edited_image(response).unwrap();
        assert_eq!(edited.data, "XYZ");
        assert_eq!(edited.commentary.as_deref(), Some("Softened the highlights."));
    }

    #[test]
    fn blank_mime_type_falls_back_to_png() {
        let response = response_with_parts(vec![image_part("  ", "XYZ")]);

        let edited = extract_edited_image(response).unwrap();
        assert_eq!(edited.mime_type, "image/png");
    }

    #[test]
    fn empty_image_payload_is_skipped() {
        let response = response_with_parts(vec![
            image_part("image/png", "   "),
            image_part("image/webp", "REAL"),
        ]);

        let edited = extract_edited_image(response).unwrap();
        assert_eq!(edited.mime_type, "image/webp");
        assert_eq!(edited.data, "REAL");
    }

    #[test]
    fn text_only_response_is_text_only_error() {
        let response = response_with_parts(vec![text_part("I can only describe this image.")]);

        let err = extract_edited_image(response).unwrap_err();
        match err {
            GeminiError::TextOnly { text } => {
                assert_eq!(text, "I can only describe this image.");
            }
            other => panic!("expected TextOnly, got {other:?}"),
        }
    }

    #[test]
    fn text_only_display_does_not_leak_model_text() {
        let err = GeminiError::TextOnly {
            text: "private diagnostic".to_string(),
        };
        assert!(!err.to_string().contains("private diagnostic"));
    }

    #[test]
    fn no_parts_is_empty_error() {
        let response = response_with_parts(vec![]);
        assert!(matches!(
            extract_edited_image(response),
            Err(GeminiError::Empty)
        ));
    }

    #[test]
    fn no_candidates_is_empty_error() {
        let response = GenerateContentResponse {
            candidates: vec![],
            usage_metadata: None,
            model_version: None,
            response_id: None,
        };
        assert!(matches!(
            extract_edited_image(response),
            Err(GeminiError::Empty)
        ));
    }
}
