use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_employee::{Employee, EmployeeListQuery, EmployeeListResponse};

use crate::domain::a001_employee::service;

/// GET /api/employees?search=&role=&sort=salary&direction=desc
pub async fn list(
    Query(query): Query<EmployeeListQuery>,
) -> Result<Json<EmployeeListResponse>, StatusCode> {
    match service::list(&query) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Failed to list employees: {}", e);
            Err(e.status_code())
        }
    }
}

/// GET /api/employees/:id
pub async fn get_by_id(Path(id): Path<i64>) -> Result<Json<Employee>, StatusCode> {
    match service::get_by_id(id) {
        Ok(employee) => Ok(Json(employee)),
        Err(e) => {
            tracing::error!("Failed to get employee {}: {}", id, e);
            Err(e.status_code())
        }
    }
}
