use contracts::dashboards::d502_role_levels::{
    RoleLevelRow, RoleLevelsQuery, RoleLevelsResponse, RoleSortField,
};
use contracts::domain::a001_employee::{Employee, SortDirection};
use contracts::domain::a002_level_cell::LevelCell;
use contracts::domain::common::level_code::strip_prefix;
use std::cmp::Ordering;

use crate::shared::data::snapshot;
use crate::shared::error::DashboardError;
use crate::shared::ranking::count_by;

pub fn get_role_levels(query: &RoleLevelsQuery) -> Result<RoleLevelsResponse, DashboardError> {
    let snapshot = snapshot::current()?;
    let rows = build_role_levels(&snapshot.employees, &snapshot.cells);
    Ok(filter_and_sort(rows, query))
}

/// Applies the search term and the requested column order
pub fn filter_and_sort(rows: Vec<RoleLevelRow>, query: &RoleLevelsQuery) -> RoleLevelsResponse {
    let total = rows.len();
    let term = query
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let mut rows: Vec<RoleLevelRow> = rows
        .into_iter()
        .filter(|r| match &term {
            Some(term) => {
                r.role.to_lowercase().contains(term)
                    || r.starting_level.to_lowercase().contains(term)
            }
            None => true,
        })
        .collect();

    rows.sort_by(|a, b| {
        let ord = compare_by(a, b, query.sort);
        match query.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    RoleLevelsResponse { rows, total }
}

fn compare_by(a: &RoleLevelRow, b: &RoleLevelRow, field: RoleSortField) -> Ordering {
    match field {
        RoleSortField::Role => a.role.to_lowercase().cmp(&b.role.to_lowercase()),
        RoleSortField::StartingLevel => a
            .starting_level
            .to_lowercase()
            .cmp(&b.starting_level.to_lowercase()),
        RoleSortField::Employees => a.employees.cmp(&b.employees),
        RoleSortField::SalaryMin => a.salary_min.total_cmp(&b.salary_min),
        RoleSortField::SalaryMax => a.salary_max.total_cmp(&b.salary_max),
    }
}

/// One row per role, ordered by role name
pub fn build_role_levels(employees: &[Employee], cells: &[LevelCell]) -> Vec<RoleLevelRow> {
    let by_role = count_by(employees, |e| e.role.clone());

    let mut rows: Vec<RoleLevelRow> = by_role
        .into_iter()
        .map(|(role, _)| {
            let members: Vec<&Employee> = employees.iter().filter(|e| e.role == role).collect();
            role_row(role, &members, cells)
        })
        .collect();

    rows.sort_by(|a, b| a.role.cmp(&b.role));
    rows
}

fn role_row(role: String, members: &[&Employee], cells: &[LevelCell]) -> RoleLevelRow {
    let starting_level =
        mode(count_by(members, |e| e.level_base().to_string())).unwrap_or_default();

    // Prefix match on the raw code, so "TEC5" also takes "TEC58-..." rows
    let in_level: Vec<&&Employee> = members
        .iter()
        .filter(|e| e.level_code.starts_with(starting_level.as_str()))
        .collect();
    let grade_references: Vec<String> = in_level
        .iter()
        .filter_map(|e| {
            let parts: Vec<&str> = e.level_code.split('-').collect();
            (parts.len() >= 3).then(|| format!("{}-{}", parts[1], parts[2]))
        })
        .collect();
    let common_grade_reference = mode(count_by(&grade_references, |g| g.clone())).unwrap_or_default();

    let base = strip_prefix(&starting_level);
    let grid_salaries: Vec<f64> = cells
        .iter()
        .filter(|c| c.code == base)
        .map(|c| c.salary)
        .collect();
    let own_salaries: Vec<f64> = members.iter().map(|e| e.salary).collect();

    let range_from_grid = !grid_salaries.is_empty();
    let (salary_min, salary_max) = if range_from_grid {
        min_max(&grid_salaries)
    } else {
        min_max(&own_salaries)
    };

    let salary_mean = if own_salaries.is_empty() {
        0.0
    } else {
        own_salaries.iter().sum::<f64>() / own_salaries.len() as f64
    };

    RoleLevelRow {
        role,
        starting_level,
        common_grade_reference,
        employees: members.len(),
        salary_min,
        salary_max,
        salary_mean,
        range_from_grid,
    }
}

/// Most frequent key; the first one to reach the maximum wins
fn mode(counts: Vec<(String, usize)>) -> Option<String> {
    let mut best: Option<(String, usize)> = None;
    for (key, count) in counts {
        if best.as_ref().map_or(true, |(_, n)| count > *n) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}

fn min_max(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        })
}
