use serde::{Deserialize, Serialize};

use crate::domain::a001_employee::SortDirection;

/// Column the role table is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleSortField {
    #[default]
    Role,
    StartingLevel,
    Employees,
    SalaryMin,
    SalaryMax,
}

/// Query parameters of the role table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleLevelsQuery {
    /// Case-insensitive substring of the role or of its starting level
    pub search: Option<String>,
    #[serde(default)]
    pub sort: RoleSortField,
    #[serde(default)]
    pub direction: SortDirection,
}

/// Response for the role × starting level table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleLevelsResponse {
    pub rows: Vec<RoleLevelRow>,
    /// Number of roles before search
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleLevelRow {
    pub role: String,
    /// Most common level base among the role's employees ("TEC58")
    pub starting_level: String,
    /// Most common "grade-reference" within that level, empty when none has one
    pub common_grade_reference: String,
    pub employees: usize,
    /// Range of the level's grid when known, else of the employees' salaries
    pub salary_min: f64,
    pub salary_max: f64,
    pub salary_mean: f64,
    /// True when the range comes from the salary grid
    pub range_from_grid: bool,
}
