use axum::{http::StatusCode, Json};
use contracts::dashboards::d501_level_occupancy::LevelOccupancyResponse;

use crate::dashboards::d501_level_occupancy::service;

/// GET /api/d501/occupancy
pub async fn get_occupancy() -> Result<Json<LevelOccupancyResponse>, StatusCode> {
    match service::get_occupancy() {
        Ok(response) => {
            tracing::info!(
                "D501 Dashboard: {}/{} levels occupied ({}%)",
                response.stats.occupied_levels,
                response.stats.total_levels,
                response.stats.occupancy_percent
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D501 Dashboard: Failed to analyze occupancy: {}", e);
            Err(e.status_code())
        }
    }
}
