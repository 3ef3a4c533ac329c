use contracts::domain::a002_level_cell::{
    Level, LevelDetailResponse, LevelListQuery, LevelListResponse, LevelPivot,
    LevelPivotsResponse,
};
use contracts::shared::highlight::HighlightState;

use crate::shared::data::snapshot;
use crate::shared::error::DashboardError;
use crate::shared::highlight;
use crate::shared::pivot::SalaryGrid;

/// Level catalogue of the current snapshot, filtered by `query.search`
pub fn list(query: &LevelListQuery) -> Result<LevelListResponse, DashboardError> {
    let snapshot = snapshot::current()?;
    Ok(list_levels(&snapshot.levels, query, &highlight::current()))
}

/// One level with its pivot; `code` may be the complete or the base code
pub fn get_detail(code: &str) -> Result<LevelDetailResponse, DashboardError> {
    let snapshot = snapshot::current()?;
    level_detail(&snapshot.levels, code, &highlight::current())
}

/// Pivot of every level matching `query.search`
pub fn list_pivots(query: &LevelListQuery) -> Result<LevelPivotsResponse, DashboardError> {
    let snapshot = snapshot::current()?;
    Ok(level_pivots(&snapshot.levels, query, &highlight::current()))
}

pub fn list_levels(
    levels: &[Level],
    query: &LevelListQuery,
    state: &HighlightState,
) -> LevelListResponse {
    let term = query.search.as_deref().unwrap_or_default();

    LevelListResponse {
        levels: levels
            .iter()
            .filter(|l| l.matches_search(term))
            .map(Level::summary)
            .collect(),
        total: levels.len(),
        highlighted_level: highlight::resolve_level(levels, state).map(|l| l.complete_code.clone()),
    }
}

pub fn find_level<'a>(levels: &'a [Level], code: &str) -> Option<&'a Level> {
    let code = code.trim();
    levels
        .iter()
        .find(|l| l.complete_code == code)
        .or_else(|| levels.iter().find(|l| l.code == code))
}

pub fn level_pivots(
    levels: &[Level],
    query: &LevelListQuery,
    state: &HighlightState,
) -> LevelPivotsResponse {
    let term = query.search.as_deref().unwrap_or_default();
    let resolved = highlight::resolve_level(levels, state);

    LevelPivotsResponse {
        levels: levels
            .iter()
            .filter(|l| l.matches_search(term))
            .map(|l| level_pivot(l, resolved, state))
            .collect(),
        highlighted_level: resolved.map(|l| l.complete_code.clone()),
    }
}

pub fn level_detail(
    levels: &[Level],
    code: &str,
    state: &HighlightState,
) -> Result<LevelDetailResponse, DashboardError> {
    let level =
        find_level(levels, code).ok_or_else(|| DashboardError::LevelNotFound(code.to_string()))?;

    let LevelPivot {
        level: summary,
        pivot,
        highlighted,
    } = level_pivot(level, highlight::resolve_level(levels, state), state);

    Ok(LevelDetailResponse {
        level: summary,
        pivot,
        highlighted,
        selected_employee: if highlighted {
            state.selection().map(|s| s.employee.clone())
        } else {
            None
        },
    })
}

/// Pivot of `level`; `resolved` is the level the selection points into
fn level_pivot(level: &Level, resolved: Option<&Level>, state: &HighlightState) -> LevelPivot {
    let highlighted = resolved.map_or(false, |h| h.code == level.code);

    // A selection resolved through the base code still names its own prefix
    let match_code = match state.code() {
        Some(selected) if highlighted => selected,
        _ => level.complete_code.as_str(),
    };

    let mut pivot = SalaryGrid::build(&level.cells).to_pivot(match_code, state);
    pivot.code = level.complete_code.clone();

    LevelPivot {
        level: level.summary(),
        pivot,
        highlighted,
    }
}
