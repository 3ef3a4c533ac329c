//! Cross-table selection.
//!
//! The employee list writes a selection; the level catalogue and the pivot
//! tables read it and decide on every render whether one of their cells is
//! the highlighted one. There is exactly one selection per session and the
//! last write wins.

use serde::{Deserialize, Serialize};

use crate::domain::a001_employee::{Employee, EmployeeSnapshot};
use crate::domain::a002_level_cell::LevelSummary;

/// The selected employee and the grid cell their code points to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightSelection {
    /// Complete level code ("TEC58")
    pub code: String,
    pub grade: Option<String>,
    pub reference: Option<String>,
    pub employee: EmployeeSnapshot,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HighlightState {
    #[default]
    Empty,
    Selected(HighlightSelection),
}

impl HighlightState {
    pub fn selection(&self) -> Option<&HighlightSelection> {
        match self {
            HighlightState::Empty => None,
            HighlightState::Selected(selection) => Some(selection),
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.selection().map(|s| s.code.as_str())
    }

    /// True when the cell (code, grade, reference) is the selected one.
    /// A selection without grade or reference highlights no cell.
    pub fn is_highlighted(&self, code: &str, grade: &str, reference: &str) -> bool {
        match self.selection() {
            Some(s) => {
                s.code == code
                    && s.grade.as_deref() == Some(grade)
                    && s.reference.as_deref() == Some(reference)
            }
            None => false,
        }
    }
}

/// Body of `POST /api/highlight`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SetHighlightRequest {
    /// Select an employee of the snapshot; the cell is derived from their code
    Employee { employee_id: i64 },
    /// Select an explicit cell
    Cell {
        code: String,
        grade: Option<String>,
        reference: Option<String>,
        employee: EmployeeSnapshot,
    },
}

/// Current selection plus the level it resolves to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightResponse {
    pub state: HighlightState,
    /// Level holding the selection; `None` when nothing is selected or no level matches
    pub level: Option<LevelSummary>,
}

/// Owner of the session's single highlight state
#[derive(Debug, Clone, Default)]
pub struct HighlightContext {
    state: HighlightState,
}

impl HighlightContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HighlightState {
        &self.state
    }

    /// Overwrites the current selection. No check that the target exists.
    pub fn set_highlight(
        &mut self,
        code: impl Into<String>,
        grade: Option<String>,
        reference: Option<String>,
        employee: EmployeeSnapshot,
    ) {
        self.state = HighlightState::Selected(HighlightSelection {
            code: code.into(),
            grade,
            reference,
            employee,
        });
    }

    /// Parses the employee's raw code and selects the resulting cell
    pub fn select_employee(&mut self, employee: &Employee) -> &HighlightState {
        let parsed = employee.parsed_code();
        self.set_highlight(
            parsed.code(),
            parsed.grade().map(str::to_string),
            parsed.reference().map(str::to_string),
            employee.snapshot(),
        );
        &self.state
    }

    pub fn clear_highlight(&mut self) {
        self.state = HighlightState::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee::EmployeeId;

    fn snapshot() -> EmployeeSnapshot {
        EmployeeSnapshot {
            name: "João Pereira".into(),
            role: "Técnico em Informática".into(),
            salary: 3890.0,
        }
    }

    #[test]
    fn test_starts_empty() {
        let ctx = HighlightContext::new();
        assert_eq!(ctx.state(), &HighlightState::Empty);
        assert!(!ctx.state().is_highlighted("TEC58", "III", "E"));
        assert_eq!(ctx.state().selection(), None);
    }

    #[test]
    fn test_set_and_clear_round_trip() {
        let mut ctx = HighlightContext::new();
        ctx.set_highlight("TEC58", Some("III".into()), Some("E".into()), snapshot());

        let state = ctx.state();
        assert!(state.is_highlighted("TEC58", "III", "E"));
        assert!(!state.is_highlighted("TEC58", "III", "F"));
        assert!(!state.is_highlighted("TEC58", "II", "E"));
        assert!(!state.is_highlighted("SEG58", "III", "E"));
        assert_eq!(state.code(), Some("TEC58"));
        assert_eq!(
            state.selection().map(|s| s.employee.name.as_str()),
            Some("João Pereira")
        );

        ctx.clear_highlight();
        assert!(!ctx.state().is_highlighted("TEC58", "III", "E"));
        assert_eq!(ctx.state().code(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut ctx = HighlightContext::new();
        ctx.set_highlight("TEC58", Some("III".into()), Some("E".into()), snapshot());
        ctx.set_highlight("SEG16", Some("I".into()), Some("A".into()), snapshot());

        assert!(!ctx.state().is_highlighted("TEC58", "III", "E"));
        assert!(ctx.state().is_highlighted("SEG16", "I", "A"));
    }

    #[test]
    fn test_selection_without_cell_highlights_no_cell() {
        let mut ctx = HighlightContext::new();
        let employee = Employee {
            id: EmployeeId(1),
            name: "Ana".into(),
            role: "Agente".into(),
            level_code: "ACT-30".into(),
            level_code_clean: None,
            salary: 2100.0,
            level_id: None,
        };
        let state = ctx.select_employee(&employee);

        assert_eq!(state.code(), Some("ACT-30"));
        assert!(!state.is_highlighted("ACT-30", "", ""));
    }

    #[test]
    fn test_request_variants() {
        let by_employee: SetHighlightRequest =
            serde_json::from_str(r#"{"employee_id": 42}"#).unwrap();
        assert!(matches!(by_employee, SetHighlightRequest::Employee { employee_id: 42 }));

        let by_cell: SetHighlightRequest = serde_json::from_str(
            r#"{"code": "TEC58", "grade": "III", "reference": "E",
                "employee": {"name": "A", "role": "B", "salary": 1.0}}"#,
        )
        .unwrap();
        assert!(matches!(by_cell, SetHighlightRequest::Cell { .. }));
    }

    #[test]
    fn test_serialized_shape() {
        let mut ctx = HighlightContext::new();
        let empty = serde_json::to_value(ctx.state()).unwrap();
        assert_eq!(empty["state"], "empty");

        ctx.set_highlight("TEC58", Some("III".into()), None, snapshot());
        let selected = serde_json::to_value(ctx.state()).unwrap();
        assert_eq!(selected["state"], "selected");
        assert_eq!(selected["code"], "TEC58");
        assert_eq!(selected["employee"]["name"], "João Pereira");
    }
}
