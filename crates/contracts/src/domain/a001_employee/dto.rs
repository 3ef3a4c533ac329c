use serde::{Deserialize, Serialize};

use super::aggregate::Employee;

/// Column the employee list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeSortField {
    #[default]
    Name,
    Role,
    LevelCode,
    Salary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Query parameters of the employee list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeListQuery {
    /// Case-insensitive substring of the name
    pub search: Option<String>,
    /// Exact role title
    pub role: Option<String>,
    #[serde(default)]
    pub sort: EmployeeSortField,
    #[serde(default)]
    pub direction: SortDirection,
}

/// Filtered, ordered employee list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<Employee>,
    /// Number of employees after filtering
    pub filtered: usize,
    /// Number of employees in the snapshot
    pub total: usize,
    /// Distinct role titles, sorted, for the role filter
    pub roles: Vec<String>,
}
