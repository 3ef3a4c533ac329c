use contracts::domain::a001_employee::{Employee, EmployeeId, EmployeeSnapshot};
use contracts::domain::a002_level_cell::Level;
use contracts::domain::common::level_code::strip_prefix;
use contracts::shared::highlight::{
    HighlightContext, HighlightResponse, HighlightState, SetHighlightRequest,
};
use once_cell::sync::Lazy;
use std::sync::RwLock;

use crate::shared::data::snapshot;
use crate::shared::error::DashboardError;

/// The single selection of the running dashboard session
static HIGHLIGHT: Lazy<RwLock<HighlightContext>> =
    Lazy::new(|| RwLock::new(HighlightContext::new()));

pub fn current() -> HighlightState {
    HIGHLIGHT
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .state()
        .clone()
}

pub fn set_highlight(
    code: String,
    grade: Option<String>,
    reference: Option<String>,
    employee: EmployeeSnapshot,
) -> HighlightState {
    let mut ctx = HIGHLIGHT.write().unwrap_or_else(|e| e.into_inner());
    ctx.set_highlight(code, grade, reference, employee);
    ctx.state().clone()
}

pub fn select_employee(employee: &Employee) -> HighlightState {
    let mut ctx = HIGHLIGHT.write().unwrap_or_else(|e| e.into_inner());
    ctx.select_employee(employee).clone()
}

pub fn clear_highlight() {
    HIGHLIGHT
        .write()
        .unwrap_or_else(|e| e.into_inner())
        .clear_highlight();
}

/// Applies a selection request against the current snapshot
pub fn apply(request: SetHighlightRequest) -> Result<HighlightState, DashboardError> {
    match request {
        SetHighlightRequest::Employee { employee_id } => {
            let snapshot = snapshot::current()?;
            let employee = snapshot
                .employee(EmployeeId(employee_id))
                .ok_or(DashboardError::EmployeeNotFound(employee_id))?;
            Ok(select_employee(employee))
        }
        SetHighlightRequest::Cell {
            code,
            grade,
            reference,
            employee,
        } => Ok(set_highlight(code, grade, reference, employee)),
    }
}

/// Current selection with the level it resolves to. Without a snapshot the
/// level is simply unknown.
pub fn describe(state: HighlightState) -> HighlightResponse {
    let level = snapshot::current()
        .ok()
        .and_then(|s| resolve_level(&s.levels, &state).map(Level::summary));
    HighlightResponse { state, level }
}

/// Level the selection points into: exact complete-code match first, then the
/// stored base code. `None` when nothing is selected or nothing matches.
pub fn resolve_level<'a>(levels: &'a [Level], state: &HighlightState) -> Option<&'a Level> {
    let code = state.code()?;

    if let Some(level) = levels.iter().find(|l| l.complete_code == code) {
        return Some(level);
    }

    let base = strip_prefix(code);
    if let Some(level) = levels.iter().find(|l| l.code == base) {
        tracing::debug!("Highlight {} resolved by base code {}", code, base);
        return Some(level);
    }

    // Legal state: the catalogue simply shows nothing selected
    tracing::debug!("Highlighted code {} matches no level", code);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_level_cell::{LevelCell, LevelCellId};
    use contracts::domain::common::Category;

    use crate::shared::data::snapshot::{Snapshot, PUBLISH_LOCK};

    fn level(code: &str, complete_code: &str) -> Level {
        Level {
            code: code.into(),
            complete_code: complete_code.into(),
            category: Category::from_code(complete_code),
            cells: Vec::new(),
        }
    }

    fn selected(code: &str) -> HighlightState {
        let mut ctx = HighlightContext::new();
        ctx.set_highlight(
            code,
            Some("I".into()),
            Some("A".into()),
            EmployeeSnapshot {
                name: "Ana".into(),
                role: "Agente".into(),
                salary: 1.0,
            },
        );
        ctx.state().clone()
    }

    #[test]
    fn test_resolve_exact_then_base_code() {
        let levels = vec![level("58", "TEC58"), level("16", "16")];

        let found = resolve_level(&levels, &selected("TEC58")).unwrap();
        assert_eq!(found.code, "58");

        // Prefix unknown to the grid: falls back to base code
        let found = resolve_level(&levels, &selected("SEG16")).unwrap();
        assert_eq!(found.code, "16");
    }

    #[test]
    fn test_resolve_not_found() {
        let levels = vec![level("58", "TEC58")];
        assert!(resolve_level(&levels, &selected("ADM99")).is_none());
        assert!(resolve_level(&levels, &HighlightState::Empty).is_none());
    }

    fn cell(code: &str, grade: &str, reference: &str) -> LevelCell {
        LevelCell {
            id: LevelCellId(0),
            code: code.into(),
            complete_code: None,
            grade: grade.into(),
            reference: reference.into(),
            salary: 2000.0,
        }
    }

    #[test]
    fn test_session_selection_against_published_snapshot() {
        let _guard = PUBLISH_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        snapshot::publish(Snapshot::new(
            vec![Employee {
                id: EmployeeId(7),
                name: "Ana".into(),
                role: "Agente".into(),
                level_code: "TEC58-II-B".into(),
                level_code_clean: Some("58-II-B".into()),
                salary: 2700.0,
                level_id: None,
            }],
            vec![cell("58", "II", "B"), cell("16", "I", "A")],
        ));

        clear_highlight();
        assert_eq!(current(), HighlightState::Empty);

        let state = apply(SetHighlightRequest::Employee { employee_id: 7 }).unwrap();
        assert!(state.is_highlighted("TEC58", "II", "B"));
        assert_eq!(current(), state);
        let described = describe(current());
        assert_eq!(described.level.map(|l| l.complete_code), Some("TEC58".to_string()));

        // Unknown employee leaves the selection untouched
        assert!(matches!(
            apply(SetHighlightRequest::Employee { employee_id: 99 }),
            Err(DashboardError::EmployeeNotFound(99))
        ));
        assert!(current().is_highlighted("TEC58", "II", "B"));

        // A new cell overwrites the previous selection
        apply(SetHighlightRequest::Cell {
            code: "SEG16".into(),
            grade: Some("I".into()),
            reference: Some("A".into()),
            employee: EmployeeSnapshot {
                name: "Bruno".into(),
                role: "Vigia".into(),
                salary: 1900.0,
            },
        })
        .unwrap();
        assert!(!current().is_highlighted("TEC58", "II", "B"));
        assert!(current().is_highlighted("SEG16", "I", "A"));
        let described = describe(current());
        assert_eq!(described.level.map(|l| l.code), Some("16".to_string()));

        // Target absent from the grid is still a valid selection
        apply(SetHighlightRequest::Cell {
            code: "ADM99".into(),
            grade: None,
            reference: None,
            employee: EmployeeSnapshot {
                name: "Carla".into(),
                role: "Assessora".into(),
                salary: 5000.0,
            },
        })
        .unwrap();
        assert_eq!(current().code(), Some("ADM99"));
        assert!(describe(current()).level.is_none());

        clear_highlight();
        let described = describe(current());
        assert_eq!(described.state, HighlightState::Empty);
        assert!(described.level.is_none());
        assert!(!current().is_highlighted("TEC58", "II", "B"));
        assert!(!current().is_highlighted("SEG16", "I", "A"));
    }
}
