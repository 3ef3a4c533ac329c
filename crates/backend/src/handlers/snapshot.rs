use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::shared::data::snapshot;

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub employees: usize,
    pub cells: usize,
    pub levels: usize,
    pub loaded_at: String,
}

/// POST /api/snapshot/reload
pub async fn reload() -> Result<Json<ReloadResponse>, StatusCode> {
    match snapshot::reload().await {
        Ok(snapshot) => Ok(Json(ReloadResponse {
            employees: snapshot.employees.len(),
            cells: snapshot.cells.len(),
            levels: snapshot.levels.len(),
            loaded_at: snapshot.loaded_at.to_rfc3339(),
        })),
        Err(e) => {
            tracing::error!("Snapshot reload failed, keeping previous data: {}", e);
            Err(e.status_code())
        }
    }
}
