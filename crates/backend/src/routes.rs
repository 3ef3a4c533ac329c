use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Configures every route of the application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        // D500 Payroll Overview
        .route(
            "/api/d500/overview",
            get(handlers::d500_payroll_overview::get_overview),
        )
        // D501 Level Occupancy
        .route(
            "/api/d501/occupancy",
            get(handlers::d501_level_occupancy::get_occupancy),
        )
        // D502 Role × Level table
        .route(
            "/api/d502/role_levels",
            get(handlers::d502_role_levels::get_role_levels),
        )
        // ========================================
        // AGGREGATES (read-only)
        // ========================================
        .route("/api/employees", get(handlers::a001_employee::list))
        .route(
            "/api/employees/:id",
            get(handlers::a001_employee::get_by_id),
        )
        .route("/api/levels", get(handlers::a002_level_cell::list))
        .route(
            "/api/levels/pivots",
            get(handlers::a002_level_cell::list_pivots),
        )
        .route(
            "/api/levels/:code",
            get(handlers::a002_level_cell::get_detail),
        )
        // ========================================
        // SESSION
        // ========================================
        .route(
            "/api/highlight",
            get(handlers::highlight::get_current)
                .post(handlers::highlight::set)
                .delete(handlers::highlight::clear),
        )
        .route("/api/snapshot/reload", post(handlers::snapshot::reload))
}
