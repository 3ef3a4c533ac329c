use axum::{http::StatusCode, Json};
use contracts::shared::highlight::{HighlightResponse, SetHighlightRequest};

use crate::shared::highlight;

/// GET /api/highlight
pub async fn get_current() -> Json<HighlightResponse> {
    Json(highlight::describe(highlight::current()))
}

/// POST /api/highlight
pub async fn set(
    Json(request): Json<SetHighlightRequest>,
) -> Result<Json<HighlightResponse>, StatusCode> {
    match highlight::apply(request) {
        Ok(state) => {
            if let Some(selection) = state.selection() {
                tracing::info!(
                    "Highlight set: {} {:?}-{:?} ({})",
                    selection.code,
                    selection.grade,
                    selection.reference,
                    selection.employee.name
                );
            }
            Ok(Json(highlight::describe(state)))
        }
        Err(e) => {
            tracing::error!("Failed to set highlight: {}", e);
            Err(e.status_code())
        }
    }
}

/// DELETE /api/highlight
pub async fn clear() -> Json<HighlightResponse> {
    highlight::clear_highlight();
    tracing::info!("Highlight cleared");
    Json(highlight::describe(highlight::current()))
}
