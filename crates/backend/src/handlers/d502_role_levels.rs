use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d502_role_levels::{RoleLevelsQuery, RoleLevelsResponse};

use crate::dashboards::d502_role_levels::service;

/// GET /api/d502/role_levels?search=&sort=salary_max&direction=desc
pub async fn get_role_levels(
    Query(query): Query<RoleLevelsQuery>,
) -> Result<Json<RoleLevelsResponse>, StatusCode> {
    match service::get_role_levels(&query) {
        Ok(response) => {
            tracing::info!(
                "D502 Dashboard: Returning {} of {} roles",
                response.rows.len(),
                response.total
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D502 Dashboard: Failed to build role table: {}", e);
            Err(e.status_code())
        }
    }
}
