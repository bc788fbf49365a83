//! News endpoints: headlines passthrough and fake news checks

use axum::{
    extract::{Multipart, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;

use super::state::AppState;
use super::types::ApiError;
use crate::domain::detection::FinalDecision;
use crate::domain::news::HeadlinesResponse;

const FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct CheckNewsParams {
    pub query: Option<String>,
}

pub fn create_news_router() -> Router<AppState> {
    Router::new()
        .route("/getAll", get(get_all))
        .route("/checkNews", get(check_news))
        .route("/checkPdf", post(check_pdf))
}

/// GET /api/News/getAll
pub async fn get_all(State(state): State<AppState>) -> Result<Json<HeadlinesResponse>, ApiError> {
    let headlines = state.detection_service.top_headlines().await?;
    Ok(Json(headlines))
}

/// GET /api/News/checkNews?query=...
pub async fn check_news(
    State(state): State<AppState>,
    Query(params): Query<CheckNewsParams>,
) -> Result<Json<FinalDecision>, ApiError> {
    let query = params
        .query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::missing_input("Query parameter 'query' is required"))?;

    debug!(query_len = query.len(), "Checking query");

    let decision = state.detection_service.check_text(&query).await?;
    Ok(Json(decision))
}

/// POST /api/News/checkPdf (multipart field `file`)
pub async fn check_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<FinalDecision>, ApiError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload.pdf").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| {
                ApiError::bad_request(format!("Failed to read file '{}': {}", filename, e))
            })?;

        debug!(filename = %filename, bytes = bytes.len(), "Received document");
        upload = Some(bytes);
        break;
    }

    let bytes = upload
        .filter(|b| !b.is_empty())
        .ok_or_else(|| ApiError::missing_input("No file provided"))?;

    let decision = state.detection_service.check_document(bytes.to_vec()).await?;
    Ok(Json(decision))
}
