//! Portfolio Generation: orchestrates the enrichment and avatar calls.
//!
//! Flow: credential check → build both requests → issue both concurrently →
//!       decode text against the schema → attach first inline image → return.
//!
//! The two calls fail independently. A text failure fails the generation; an
//! image failure only costs the hero image.

use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::credentials::ApiKey;
use crate::errors::AppError;
use crate::generation::image::{build_image_request, extract_hero_image};
use crate::generation::prompts::{fill_template, ENRICHMENT_PROMPT_TEMPLATE};
use crate::generation::schema::portfolio_response_schema;
use crate::llm_client::prompts::{JSON_MIME_TYPE, JSON_ONLY_SYSTEM};
use crate::llm_client::{
    decode_json, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GenerativeBackend, LlmError, IMAGE_MODEL, TEXT_MODEL,
};
use crate::models::{GeneratedPortfolio, UserInput};

/// How much of an unparseable response is kept for the logs.
const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API key is missing")]
    MissingCredential,

    #[error("enrichment call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("failed to parse AI response: {source}")]
    UnparseableResponse {
        source: serde_json::Error,
        excerpt: String,
    },

    #[error("failed to build prompt: {0}")]
    Prompt(serde_json::Error),
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::MissingCredential => AppError::MissingCredential,
            GenerationError::Llm(e) => AppError::Llm(e.to_string()),
            GenerationError::UnparseableResponse { source, excerpt } => {
                AppError::LlmParse(format!("{source}; response began: {excerpt:?}"))
            }
            GenerationError::Prompt(e) => {
                AppError::Internal(anyhow::anyhow!("Failed to build enrichment prompt: {e}"))
            }
        }
    }
}

/// Runs one generation cycle.
///
/// `api_key` is resolved by the caller; `None` fails before any request is
/// sent. The enrichment and avatar requests are both started before either is
/// awaited, and the avatar branch can never fail the call.
pub async fn generate_portfolio(
    backend: &dyn GenerativeBackend,
    api_key: Option<&ApiKey>,
    input: &UserInput,
) -> Result<GeneratedPortfolio, GenerationError> {
    let api_key = api_key.ok_or(GenerationError::MissingCredential)?;
    let generation_id = Uuid::new_v4();

    let text_request = build_enrichment_request(input)?;
    let image_request = build_image_request(input);

    info!(
        %generation_id,
        "Generating portfolio for role {:?} ({} experience, {} projects, image {})",
        input.current_role,
        input.experience.len(),
        input.projects.len(),
        input.image_size.as_token()
    );

    let text_call = backend.generate_content(api_key, TEXT_MODEL, &text_request);
    let image_call = async {
        match backend
            .generate_content(api_key, IMAGE_MODEL, &image_request)
            .await
        {
            Ok(response) => Some(response),
            Err(e) => {
                warn!(%generation_id, "Image generation failed, continuing without hero image: {e}");
                None
            }
        }
    };

    let (text_result, image_response) = tokio::join!(text_call, image_call);

    let text = text_result?.text().ok_or(LlmError::EmptyContent)?;

    let mut portfolio: GeneratedPortfolio = decode_json(&text).map_err(|source| {
        let excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
        error!(%generation_id, "Failed to parse enrichment response: {source}; began: {excerpt:?}");
        GenerationError::UnparseableResponse { source, excerpt }
    })?;

    portfolio.hero_image = image_response
        .as_ref()
        .and_then(|response| hero_image_or_none(response, generation_id));

    info!(
        %generation_id,
        "Portfolio generated: {} skill groups, {} experience, {} projects, hero image: {}",
        portfolio.skills.len(),
        portfolio.experience.len(),
        portfolio.projects.len(),
        portfolio.hero_image.is_some()
    );

    Ok(portfolio)
}

fn hero_image_or_none(response: &GenerateContentResponse, generation_id: Uuid) -> Option<String> {
    match extract_hero_image(response) {
        Ok(Some(url)) => Some(url),
        Ok(None) => {
            warn!(%generation_id, "Image model returned no inline image");
            None
        }
        Err(e) => {
            warn!(%generation_id, "Discarding malformed image payload: {e}");
            None
        }
    }
}

/// Builds the schema-constrained enrichment request.
fn build_enrichment_request(input: &UserInput) -> Result<GenerateContentRequest, GenerationError> {
    let experience_json =
        serde_json::to_string(&input.experience).map_err(GenerationError::Prompt)?;
    let projects_json = serde_json::to_string(&input.projects).map_err(GenerationError::Prompt)?;

    let prompt = fill_template(
        ENRICHMENT_PROMPT_TEMPLATE,
        &[
            ("full_name", input.full_name.as_str()),
            ("current_role", input.current_role.as_str()),
            ("bio_raw", input.bio_raw.as_str()),
            ("skills_raw", input.skills_raw.as_str()),
            ("experience_json", experience_json.as_str()),
            ("projects_json", projects_json.as_str()),
        ],
    );

    Ok(GenerateContentRequest {
        contents: vec![Content::user_text(prompt)],
        system_instruction: Some(Content::system_text(JSON_ONLY_SYSTEM)),
        generation_config: Some(GenerationConfig {
            response_mime_type: Some(JSON_MIME_TYPE.to_string()),
            response_schema: Some(portfolio_response_schema()),
            image_config: None,
        }),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
