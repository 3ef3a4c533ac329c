use serde::{Deserialize, Serialize};

use crate::domain::common::ParsedCode;

// ============================================================================
// ID Type
// ============================================================================

/// Row identifier of an employee in `rf_servidores`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl EmployeeId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One active position-holder, as stored in `rf_servidores`.
///
/// Read-only snapshot: the dashboards never mutate employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "cargo")]
    pub role: String,

    /// Raw level code, e.g. "TEC58-III-E" or "ACT-30"
    #[serde(rename = "nivel_codigo")]
    pub level_code: String,

    /// Pre-cleaned variant of the level code, used by the occupancy analysis
    #[serde(rename = "nivel_codigo_limpo", default)]
    pub level_code_clean: Option<String>,

    #[serde(rename = "salario")]
    pub salary: f64,

    #[serde(rename = "nivel_id", default)]
    pub level_id: Option<i64>,
}

impl Employee {
    /// Parse the raw level code
    pub fn parsed_code(&self) -> ParsedCode {
        ParsedCode::parse(&self.level_code)
    }

    /// Part of the raw code before the first hyphen ("TEC58-III-E" -> "TEC58")
    pub fn level_base(&self) -> &str {
        self.level_code.split('-').next().unwrap_or_default()
    }

    /// Denormalized copy kept by the highlight state
    pub fn snapshot(&self) -> EmployeeSnapshot {
        EmployeeSnapshot {
            name: self.name.clone(),
            role: self.role.clone(),
            salary: self.salary,
        }
    }
}

/// Name, role and salary of the selected employee, for display next to the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    pub name: String,
    pub role: String,
    pub salary: f64,
}
