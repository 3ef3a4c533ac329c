use serde::{Deserialize, Serialize};

use super::aggregate::LevelCell;
use crate::domain::common::{compare_grades, compare_references, Category};

/// Salary progression table: all grid cells sharing one base code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Base code as stored on the grid rows ("58")
    pub code: String,
    /// Prefixed code ("TEC58") taken from employees or the stored row, else `code`
    pub complete_code: String,
    pub category: Category,
    /// Cells ordered by grade, then reference
    pub cells: Vec<LevelCell>,
}

impl Level {
    /// Distinct grades in grade order
    pub fn grades(&self) -> Vec<String> {
        let mut grades: Vec<String> = Vec::new();
        for cell in &self.cells {
            if !grades.contains(&cell.grade) {
                grades.push(cell.grade.clone());
            }
        }
        grades.sort_by(|a, b| compare_grades(a, b));
        grades
    }

    /// Distinct references in reference order
    pub fn references(&self) -> Vec<String> {
        let mut refs: Vec<String> = Vec::new();
        for cell in &self.cells {
            if !refs.contains(&cell.reference) {
                refs.push(cell.reference.clone());
            }
        }
        refs.sort_by(|a, b| compare_references(a, b));
        refs
    }

    /// Case-insensitive match on complete code, base code or category label
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.complete_code.to_lowercase().contains(&term)
            || self.code.to_lowercase().contains(&term)
            || self.category.label().to_lowercase().contains(&term)
    }

    pub fn summary(&self) -> LevelSummary {
        LevelSummary {
            code: self.code.clone(),
            complete_code: self.complete_code.clone(),
            category: self.category,
            category_label: self.category.label().to_string(),
            positions: self.cells.len(),
            grades: self.grades().len(),
            references: self.references().len(),
        }
    }
}

/// Level header for lists and drop-downs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub code: String,
    pub complete_code: String,
    pub category: Category,
    pub category_label: String,
    /// Number of grid cells
    pub positions: usize,
    pub grades: usize,
    pub references: usize,
}
