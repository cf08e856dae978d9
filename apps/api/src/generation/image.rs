//! Avatar synthesis: request construction and payload extraction.

use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

use crate::generation::prompts::{fill_template, IMAGE_PROMPT_TEMPLATE};
use crate::llm_client::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
    InlineData,
};
use crate::models::UserInput;

const ASPECT_RATIO: &str = "1:1";
const DEFAULT_IMAGE_MIME: &str = "image/png";

#[derive(Debug, Error)]
pub enum ImagePayloadError {
    #[error("inline payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("inline payload is empty")]
    Empty,

    #[error("inline payload has non-image MIME type {0:?}")]
    MimeType(String),
}

pub fn build_image_request(input: &UserInput) -> GenerateContentRequest {
    let prompt = fill_template(
        IMAGE_PROMPT_TEMPLATE,
        &[
            ("current_role", input.current_role.as_str()),
            ("skills_raw", input.skills_raw.as_str()),
        ],
    );

    GenerateContentRequest {
        contents: vec![Content::user_text(prompt)],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            image_config: Some(ImageConfig {
                image_size: input.image_size.as_token().to_string(),
                aspect_ratio: ASPECT_RATIO.to_string(),
            }),
            ..Default::default()
        }),
    }
}

/// Returns the first inline image of the response as a data URL.
///
/// `Ok(None)` means the model answered without an image, which is not an error.
pub fn extract_hero_image(
    response: &GenerateContentResponse,
) -> Result<Option<String>, ImagePayloadError> {
    response.first_inline_data().map(to_data_url).transpose()
}

fn to_data_url(inline: &InlineData) -> Result<String, ImagePayloadError> {
    let mime = match inline.mime_type.trim() {
        "" => DEFAULT_IMAGE_MIME,
        mime if mime.starts_with("image/") => mime,
        other => return Err(ImagePayloadError::MimeType(other.to_string())),
    };

    let data = inline.data.trim();
    if data.is_empty() {
        return Err(ImagePayloadError::Empty);
    }
    general_purpose::STANDARD.decode(data)?;

    Ok(format!("data:{mime};base64,{data}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::input::fixtures::sample_input;

    fn response_with(parts: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": parts}}]
        }))
        .unwrap()
    }

    #[test]
    fn test_image_request_carries_size_and_aspect() {
        let request = build_image_request(&sample_input());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["generationConfig"]["imageConfig"]["imageSize"], "2K");
        assert_eq!(value["generationConfig"]["imageConfig"]["aspectRatio"], "1:1");
        assert!(value["generationConfig"].get("responseSchema").is_none());
    }

    #[test]
    fn test_image_prompt_mentions_role_skills_and_palette() {
        let request = build_image_request(&sample_input());
        let prompt = request.contents[0].parts[0].text.clone().unwrap();
        assert!(prompt.contains("Senior Rust Engineer"));
        assert!(prompt.contains("Rust, Tokio, PostgreSQL"));
        assert!(prompt.contains("Deep Blue, Rust Orange, and Honey Gold"));
    }

    #[test]
    fn test_extract_builds_data_url() {
        let response = response_with(serde_json::json!([
            {"inlineData": {"mimeType": "image/jpeg", "data": "aGVsbG8="}}
        ]));
        assert_eq!(
            extract_hero_image(&response).unwrap().as_deref(),
            Some("data:image/jpeg;base64,aGVsbG8=")
        );
    }

    #[test]
    fn test_extract_defaults_mime_to_png() {
        let response = response_with(serde_json::json!([
            {"inlineData": {"data": "aGVsbG8="}}
        ]));
        let url = extract_hero_image(&response).unwrap().unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_extract_without_image_is_none() {
        let response = response_with(serde_json::json!([{"text": "I cannot draw that."}]));
        assert!(extract_hero_image(&response).unwrap().is_none());
    }

    #[test]
    fn test_extract_rejects_malformed_base64() {
        let response = response_with(serde_json::json!([
            {"inlineData": {"mimeType": "image/png", "data": "not base64!!"}}
        ]));
        assert!(matches!(
            extract_hero_image(&response),
            Err(ImagePayloadError::Encoding(_))
        ));
    }

    #[test]
    fn test_extract_rejects_non_image_mime() {
        let response = response_with(serde_json::json!([
            {"inlineData": {"mimeType": "application/pdf", "data": "aGVsbG8="}}
        ]));
        assert!(matches!(
            extract_hero_image(&response),
            Err(ImagePayloadError::MimeType(_))
        ));
    }
}
