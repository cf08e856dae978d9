//! Axum route handlers for the Preview API.

use axum::Json;
use serde::Deserialize;

use crate::models::{GeneratedPortfolio, UserInput};
use crate::preview::recency::current_year;
use crate::preview::view::{build_view, PortfolioView, ViewOptions};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub user: UserInput,
    pub portfolio: GeneratedPortfolio,
    #[serde(flatten)]
    pub options: ViewOptions,
    /// Overrides the server's calendar year; mostly for reproducible previews.
    pub year: Option<i32>,
}

/// POST /api/v1/portfolios/preview
///
/// Derives the page view model from a generated portfolio and the client's
/// current view state. Never fails once the body deserializes.
pub async fn handle_preview(Json(request): Json<PreviewRequest>) -> Json<PortfolioView> {
    let year = request.year.unwrap_or_else(current_year);
    Json(build_view(
        &request.user,
        &request.portfolio,
        &request.options,
        year,
    ))
}
