//! `GET /health`: whether the catalog can serve the training pages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use trainer_db::repositories::catalog_repo::CatalogSummary;
use trainer_db::repositories::CatalogRepo;

use crate::state::AppState;
use crate::views::compose::BASIC_CHARACTER;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogStatus {
    Ready,
    /// Reachable, but `/basic/` will 404 until the basic character is added.
    MissingBasicTraining,
    Unavailable,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: CatalogStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<CatalogSummary>,
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match CatalogRepo::summary(&state.pool, BASIC_CHARACTER).await {
        Ok(summary) => {
            let status = if summary.has_basic_training {
                CatalogStatus::Ready
            } else {
                CatalogStatus::MissingBasicTraining
            };
            let body = HealthResponse {
                status,
                catalog: Some(summary),
            };
            (StatusCode::OK, Json(body))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Catalog summary failed");
            let body = HealthResponse {
                status: CatalogStatus::Unavailable,
                catalog: None,
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(body))
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
