use serde::{Deserialize, Serialize};

/// Response for the level occupancy dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelOccupancyResponse {
    pub stats: OccupancyStats,
    /// Occupied codes, by employee count descending (treemap)
    pub occupied: Vec<OccupiedLevel>,
    /// Codes defined in the grid with no employee, natural order
    pub vacant: Vec<String>,
    /// Codes held by employees but absent from the grid, by employee count descending
    pub unmatched: Vec<OccupiedLevel>,
    /// Every code (occupied, vacant or unmatched), natural order (matrix grid)
    pub grid: Vec<LevelSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyStats {
    /// Distinct base codes defined in the grid
    pub total_levels: usize,
    /// Grid codes held by at least one employee
    pub occupied_levels: usize,
    pub vacant_levels: usize,
    /// Employee codes with no counterpart in the grid
    pub unmatched_levels: usize,
    /// round(occupied / total × 100); 0 when the grid is empty
    pub occupancy_percent: u32,
    /// Employee code with the most employees (first one on ties), if any
    pub largest_level: Option<OccupiedLevel>,
    /// Employee codes with exactly one employee
    pub single_employee_levels: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupiedLevel {
    pub code: String,
    pub employees: usize,
    /// "role (count)" entries, sorted
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LevelSlot {
    Vacant {
        code: String,
    },
    Occupied {
        code: String,
        employees: usize,
        roles: Vec<String>,
    },
    Unmatched {
        code: String,
        employees: usize,
        roles: Vec<String>,
    },
}

impl LevelSlot {
    pub fn code(&self) -> &str {
        match self {
            LevelSlot::Vacant { code }
            | LevelSlot::Occupied { code, .. }
            | LevelSlot::Unmatched { code, .. } => code,
        }
    }
}
