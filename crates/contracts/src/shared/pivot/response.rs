use serde::{Deserialize, Serialize};

/// Grade × reference salary table of one level, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryPivot {
    /// Complete code of the level the pivot belongs to
    pub code: String,
    /// Row axis, in grade order
    pub grades: Vec<String>,
    /// Column axis, in reference order
    pub references: Vec<String>,
    pub rows: Vec<PivotRow>,
}

/// One grade row of the pivot, one cell per reference column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotRow {
    pub grade: String,
    pub cells: Vec<PivotCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotCell {
    pub reference: String,
    /// `None` when the grid has no entry for this pair ("no data"), never zero
    pub salary: Option<f64>,
    pub highlighted: bool,
}

impl SalaryPivot {
    /// Cell at (grade, reference), if that pair is on the axes
    pub fn cell(&self, grade: &str, reference: &str) -> Option<&PivotCell> {
        self.rows
            .iter()
            .find(|row| row.grade == grade)?
            .cells
            .iter()
            .find(|cell| cell.reference == reference)
    }

    pub fn highlighted_cell(&self) -> Option<(&str, &PivotCell)> {
        self.rows.iter().find_map(|row| {
            row.cells
                .iter()
                .find(|cell| cell.highlighted)
                .map(|cell| (row.grade.as_str(), cell))
        })
    }
}
