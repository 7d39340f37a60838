use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};

use super::AppState;
use crate::error::AresError;
use crate::models::*;
use crate::optimizer::{self, report};
use crate::visualizer::{self, Figure};

// ============================================================
// Error Handling
// ============================================================

/// Map a library error to a response.
///
/// Input problems (blank query, out-of-range slider) go back to the client
/// verbatim with BAD_REQUEST. Anything else is logged in full and the client
/// only sees a generic message.
fn api_error(e: AresError) -> (StatusCode, String) {
    if e.is_user_error() {
        tracing::warn!("Validation error: {}", e);
        return (StatusCode::BAD_REQUEST, e.to_string());
    }

    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Shell
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../index.html"))
}

pub async fn list_pages() -> Json<Vec<Page>> {
    Json(pages())
}

// ============================================================
// Assistant
// ============================================================

pub async fn ask(
    State(state): State<AppState>,
    Json(input): Json<AskInput>,
) -> Result<Json<AskResponse>, (StatusCode, String)> {
    state.knowledge.answer(&input.query).map(Json).map_err(api_error)
}

// ============================================================
// Optimizer
// ============================================================

pub async fn recommend(
    State(state): State<AppState>,
    Json(input): Json<RecommendInput>,
) -> Result<Json<RecommendResponse>, (StatusCode, String)> {
    // Training a forest per request is CPU-bound; keep it off the async workers.
    let config = state.optimizer;
    let recommendation =
        tokio::task::spawn_blocking(move || optimizer::recommend(&config, &input))
            .await
            .map_err(AresError::from)
            .and_then(|result| result)
            .map_err(api_error)?;
    let summary = report::summary_lines(&recommendation);

    Ok(Json(RecommendResponse {
        recommendation,
        summary,
    }))
}

// ============================================================
// Visualizer
// ============================================================

pub async fn rocket_geometry(
    Json(params): Json<RocketGeometryParams>,
) -> Result<Json<RocketGeometry>, (StatusCode, String)> {
    visualizer::render(&params).map(Json).map_err(api_error)
}

pub async fn rocket_figure(
    Json(params): Json<RocketGeometryParams>,
) -> Result<Json<Figure>, (StatusCode, String)> {
    visualizer::render(&params)
        .map(|geometry| Json(visualizer::to_figure(&geometry)))
        .map_err(api_error)
}
