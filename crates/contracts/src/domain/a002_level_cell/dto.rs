use serde::{Deserialize, Serialize};

use super::level::LevelSummary;
use crate::domain::a001_employee::EmployeeSnapshot;
use crate::shared::pivot::SalaryPivot;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelListQuery {
    /// Filter on complete code, base code or category
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelListResponse {
    pub levels: Vec<LevelSummary>,
    /// Number of levels in the snapshot, before search
    pub total: usize,
    /// Complete code of the level holding the current highlight, if any
    pub highlighted_level: Option<String>,
}

/// One level with its grade × reference pivot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDetailResponse {
    pub level: LevelSummary,
    pub pivot: SalaryPivot,
    /// True when the highlighted employee sits in this level
    pub highlighted: bool,
    /// Employee shown in the breadcrumb while the level is highlighted
    pub selected_employee: Option<EmployeeSnapshot>,
}

/// One level of the all-levels view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelPivot {
    pub level: LevelSummary,
    pub pivot: SalaryPivot,
    pub highlighted: bool,
}

/// Every level's grade × reference table, in catalogue order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelPivotsResponse {
    pub levels: Vec<LevelPivot>,
    pub highlighted_level: Option<String>,
}
