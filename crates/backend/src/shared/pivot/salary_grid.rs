use contracts::domain::a002_level_cell::LevelCell;
use contracts::domain::common::{compare_grades, compare_references};
use contracts::shared::highlight::HighlightState;
use contracts::shared::pivot::{PivotCell, PivotRow, SalaryPivot};
use std::collections::HashMap;

/// Grade → reference → salary lookup for the cells of one level
#[derive(Debug, Clone, Default)]
pub struct SalaryGrid {
    salaries: HashMap<String, HashMap<String, f64>>,
    grades: Vec<String>,
    references: Vec<String>,
}

impl SalaryGrid {
    /// Build the lookup and both sorted axes. A repeated (grade, reference) keeps the last salary.
    pub fn build(cells: &[LevelCell]) -> Self {
        let mut salaries: HashMap<String, HashMap<String, f64>> = HashMap::new();
        let mut grades: Vec<String> = Vec::new();
        let mut references: Vec<String> = Vec::new();

        for cell in cells {
            salaries
                .entry(cell.grade.clone())
                .or_default()
                .insert(cell.reference.clone(), cell.salary);

            if !grades.contains(&cell.grade) {
                grades.push(cell.grade.clone());
            }
            if !references.contains(&cell.reference) {
                references.push(cell.reference.clone());
            }
        }

        grades.sort_by(|a, b| compare_grades(a, b));
        references.sort_by(|a, b| compare_references(a, b));

        Self {
            salaries,
            grades,
            references,
        }
    }

    /// Salary at (grade, reference); `None` means the grid has no such cell
    pub fn get(&self, grade: &str, reference: &str) -> Option<f64> {
        self.salaries.get(grade)?.get(reference).copied()
    }

    pub fn grades(&self) -> &[String] {
        &self.grades
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// Render the full grades × references table for the level `code`,
    /// flagging the cell the highlight points to.
    pub fn to_pivot(&self, code: &str, highlight: &HighlightState) -> SalaryPivot {
        let rows = self
            .grades
            .iter()
            .map(|grade| PivotRow {
                grade: grade.clone(),
                cells: self
                    .references
                    .iter()
                    .map(|reference| PivotCell {
                        reference: reference.clone(),
                        salary: self.get(grade, reference),
                        highlighted: highlight.is_highlighted(code, grade, reference),
                    })
                    .collect(),
            })
            .collect();

        SalaryPivot {
            code: code.to_string(),
            grades: self.grades.clone(),
            references: self.references.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_employee::EmployeeSnapshot;
    use contracts::domain::a002_level_cell::LevelCellId;
    use contracts::shared::highlight::HighlightContext;

    fn cell(grade: &str, reference: &str, salary: f64) -> LevelCell {
        LevelCell {
            id: LevelCellId(0),
            code: "58".into(),
            complete_code: None,
            grade: grade.into(),
            reference: reference.into(),
            salary,
        }
    }

    fn sample() -> Vec<LevelCell> {
        vec![
            cell("III", "A", 3000.0),
            cell("I", "A", 2500.0),
            cell("I", "B", 2550.0),
            cell("II", "A2", 2700.0),
            cell("10", "A", 4100.0),
        ]
    }

    #[test]
    fn test_reads_back_every_input_cell() {
        let cells = sample();
        let grid = SalaryGrid::build(&cells);
        for c in &cells {
            assert_eq!(grid.get(&c.grade, &c.reference), Some(c.salary));
        }
    }

    #[test]
    fn test_missing_pair_is_absent_not_zero() {
        let grid = SalaryGrid::build(&sample());
        assert_eq!(grid.get("III", "B"), None);
        assert_eq!(grid.get("IV", "A"), None);

        let pivot = grid.to_pivot("TEC58", &HighlightState::Empty);
        assert_eq!(pivot.cell("III", "B").and_then(|c| c.salary), None);
        assert_eq!(pivot.cell("I", "B").and_then(|c| c.salary), Some(2550.0));
    }

    #[test]
    fn test_axes_are_sorted() {
        let grid = SalaryGrid::build(&sample());
        assert_eq!(grid.grades(), ["10", "I", "II", "III"]);
        assert_eq!(grid.references(), ["A", "B", "A2"]);
    }

    #[test]
    fn test_pivot_flags_only_the_highlighted_cell() {
        let grid = SalaryGrid::build(&sample());
        let mut ctx = HighlightContext::new();
        ctx.set_highlight(
            "TEC58",
            Some("I".into()),
            Some("B".into()),
            EmployeeSnapshot {
                name: "Ana".into(),
                role: "Agente".into(),
                salary: 2550.0,
            },
        );

        let pivot = grid.to_pivot("TEC58", ctx.state());
        let flagged: usize = pivot
            .rows
            .iter()
            .map(|r| r.cells.iter().filter(|c| c.highlighted).count())
            .sum();
        assert_eq!(flagged, 1);
        assert_eq!(pivot.highlighted_cell().map(|(g, c)| (g, c.reference.as_str())), Some(("I", "B")));

        // Same grade/reference in another level stays plain
        let other = grid.to_pivot("ADM58", ctx.state());
        assert!(other.highlighted_cell().is_none());

        ctx.clear_highlight();
        assert!(grid.to_pivot("TEC58", ctx.state()).highlighted_cell().is_none());
    }

    #[test]
    fn test_empty_grid() {
        let grid = SalaryGrid::build(&[]);
        assert!(grid.grades().is_empty());
        assert!(grid.to_pivot("58", &HighlightState::Empty).rows.is_empty());
    }
}
