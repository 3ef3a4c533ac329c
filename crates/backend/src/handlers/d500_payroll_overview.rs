use axum::{http::StatusCode, Json};
use contracts::dashboards::d500_payroll_overview::PayrollOverviewResponse;

use crate::dashboards::d500_payroll_overview::service;

/// GET /api/d500/overview
pub async fn get_overview() -> Result<Json<PayrollOverviewResponse>, StatusCode> {
    match service::get_overview() {
        Ok(response) => {
            tracing::info!(
                "D500 Dashboard: {} employees, payroll mass {}",
                response.kpis.total_employees,
                contracts::shared::format::format_currency(response.kpis.payroll_mass)
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D500 Dashboard: Failed to build overview: {}", e);
            Err(e.status_code())
        }
    }
}
