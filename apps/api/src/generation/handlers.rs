//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::generation::generator::generate_portfolio;
use crate::models::{GeneratedPortfolio, UserInput};
use crate::state::AppState;

/// POST /api/v1/portfolios/generate
///
/// Enriches the submitted profile and synthesises an avatar. The credential is
/// resolved per request, so a key configured after startup is honoured.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(input): Json<UserInput>,
) -> Result<Json<GeneratedPortfolio>, AppError> {
    input.validate().map_err(AppError::Validation)?;

    let api_key = state.credentials.current();
    let portfolio = generate_portfolio(state.llm.as_ref(), api_key.as_ref(), &input).await?;

    Ok(Json(portfolio))
}
