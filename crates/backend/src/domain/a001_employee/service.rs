use contracts::domain::a001_employee::{
    Employee, EmployeeId, EmployeeListQuery, EmployeeListResponse, EmployeeSortField,
    SortDirection,
};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::shared::data::snapshot;
use crate::shared::error::DashboardError;

/// Filtered and ordered employee list from the current snapshot
pub fn list(query: &EmployeeListQuery) -> Result<EmployeeListResponse, DashboardError> {
    let snapshot = snapshot::current()?;
    Ok(list_employees(&snapshot.employees, query))
}

pub fn get_by_id(id: i64) -> Result<Employee, DashboardError> {
    let snapshot = snapshot::current()?;
    snapshot
        .employee(EmployeeId(id))
        .cloned()
        .ok_or(DashboardError::EmployeeNotFound(id))
}

pub fn list_employees(employees: &[Employee], query: &EmployeeListQuery) -> EmployeeListResponse {
    let search = query
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());
    let role = query.role.as_deref().filter(|r| !r.is_empty());

    let mut filtered: Vec<Employee> = employees
        .iter()
        .filter(|e| match &search {
            Some(term) => e.name.to_lowercase().contains(term),
            None => true,
        })
        .filter(|e| role.map_or(true, |r| e.role == r))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        let ord = compare_by(a, b, query.sort);
        match query.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    let roles: Vec<String> = employees
        .iter()
        .map(|e| e.role.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    EmployeeListResponse {
        filtered: filtered.len(),
        total: employees.len(),
        employees: filtered,
        roles,
    }
}

fn compare_by(a: &Employee, b: &Employee, field: EmployeeSortField) -> Ordering {
    match field {
        EmployeeSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        EmployeeSortField::Role => a.role.to_lowercase().cmp(&b.role.to_lowercase()),
        EmployeeSortField::LevelCode => a
            .level_code
            .to_lowercase()
            .cmp(&b.level_code.to_lowercase()),
        EmployeeSortField::Salary => a.salary.total_cmp(&b.salary),
    }
}
