use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a002_level_cell::{
    LevelDetailResponse, LevelListQuery, LevelListResponse, LevelPivotsResponse,
};

use crate::domain::a002_level_cell::service;

/// GET /api/levels?search=
pub async fn list(
    Query(query): Query<LevelListQuery>,
) -> Result<Json<LevelListResponse>, StatusCode> {
    match service::list(&query) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Failed to list levels: {}", e);
            Err(e.status_code())
        }
    }
}

/// GET /api/levels/pivots?search=
pub async fn list_pivots(
    Query(query): Query<LevelListQuery>,
) -> Result<Json<LevelPivotsResponse>, StatusCode> {
    match service::list_pivots(&query) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Failed to build level pivots: {}", e);
            Err(e.status_code())
        }
    }
}

/// GET /api/levels/:code
pub async fn get_detail(Path(code): Path<String>) -> Result<Json<LevelDetailResponse>, StatusCode> {
    match service::get_detail(&code) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Failed to get level {}: {}", code, e);
            Err(e.status_code())
        }
    }
}
