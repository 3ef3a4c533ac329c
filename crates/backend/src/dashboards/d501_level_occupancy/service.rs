use contracts::dashboards::d501_level_occupancy::{
    LevelOccupancyResponse, LevelSlot, OccupancyStats, OccupiedLevel,
};
use contracts::domain::a001_employee::Employee;
use contracts::domain::a002_level_cell::LevelCell;
use contracts::domain::common::natural_cmp;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::shared::data::snapshot;
use crate::shared::error::DashboardError;
use crate::shared::ranking::count_by;

/// Trailing "-<grade>-<reference>" of a cleaned code ("20-B-I-A" -> "20-B").
/// Only grades I, II, III, IV, IIV and IIIV are recognized here.
static GRADE_REFERENCE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-(I{1,3}V?)-[A-I]$").expect("valid suffix regex"));

/// Base code of an employee as used by the occupancy analysis.
///
/// Works on the cleaned code column and is independent of the level code
/// parser, which reads the raw column.
pub fn extract_base_code(level_code_clean: &str) -> String {
    GRADE_REFERENCE_SUFFIX
        .replace(level_code_clean, "")
        .into_owned()
}

pub fn get_occupancy() -> Result<LevelOccupancyResponse, DashboardError> {
    let snapshot = snapshot::current()?;
    Ok(analyze_occupancy(&snapshot.employees, &snapshot.cells))
}

/// Compares the base codes defined in the grid with the ones employees hold.
pub fn analyze_occupancy(employees: &[Employee], cells: &[LevelCell]) -> LevelOccupancyResponse {
    let defined: HashSet<&str> = cells.iter().map(|c| c.code.as_str()).collect();

    let held = held_levels(employees);

    let (mut occupied, mut unmatched): (Vec<OccupiedLevel>, Vec<OccupiedLevel>) = held
        .iter()
        .cloned()
        .partition(|level| defined.contains(level.code.as_str()));

    let held_codes: HashSet<&str> = held.iter().map(|l| l.code.as_str()).collect();
    let mut vacant: Vec<String> = defined
        .iter()
        .filter(|code| !held_codes.contains(*code))
        .map(|code| code.to_string())
        .collect();
    vacant.sort_by(|a, b| natural_cmp(a, b));

    let mut grid: Vec<LevelSlot> = vacant
        .iter()
        .map(|code| LevelSlot::Vacant { code: code.clone() })
        .chain(occupied.iter().map(|l| LevelSlot::Occupied {
            code: l.code.clone(),
            employees: l.employees,
            roles: l.roles.clone(),
        }))
        .chain(unmatched.iter().map(|l| LevelSlot::Unmatched {
            code: l.code.clone(),
            employees: l.employees,
            roles: l.roles.clone(),
        }))
        .collect();
    grid.sort_by(|a, b| natural_cmp(a.code(), b.code()));

    let total_levels = defined.len();
    let occupancy_percent = if total_levels == 0 {
        0
    } else {
        (occupied.len() as f64 / total_levels as f64 * 100.0).round() as u32
    };

    // First strict maximum over every held code
    let largest_level = held
        .iter()
        .fold(None::<&OccupiedLevel>, |best, level| match best {
            Some(b) if b.employees >= level.employees => Some(b),
            _ => Some(level),
        })
        .cloned();

    let stats = OccupancyStats {
        total_levels,
        occupied_levels: occupied.len(),
        vacant_levels: vacant.len(),
        unmatched_levels: unmatched.len(),
        occupancy_percent,
        largest_level,
        single_employee_levels: held.iter().filter(|l| l.employees == 1).count(),
    };

    occupied.sort_by(|a, b| b.employees.cmp(&a.employees));
    unmatched.sort_by(|a, b| b.employees.cmp(&a.employees));

    if !unmatched.is_empty() {
        tracing::warn!(
            "{} employee level codes have no counterpart in the grid",
            unmatched.len()
        );
    }

    LevelOccupancyResponse {
        stats,
        occupied,
        vacant,
        unmatched,
        grid,
    }
}

/// Employees grouped by occupancy base code, in order of first appearance.
/// Employees without a cleaned code are skipped.
fn held_levels(employees: &[Employee]) -> Vec<OccupiedLevel> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&Employee>)> = Vec::new();

    for employee in employees {
        let base = extract_base_code(employee.level_code_clean.as_deref().unwrap_or_default());
        if base.is_empty() {
            continue;
        }
        match index.get(&base) {
            Some(&i) => groups[i].1.push(employee),
            None => {
                index.insert(base.clone(), groups.len());
                groups.push((base, vec![employee]));
            }
        }
    }

    groups
        .into_iter()
        .map(|(code, members)| {
            let mut roles: Vec<String> = count_by(&members, |e| e.role.clone())
                .into_iter()
                .map(|(role, n)| format!("{} ({})", role, n))
                .collect();
            roles.sort();

            OccupiedLevel {
                code,
                employees: members.len(),
                roles,
            }
        })
        .collect()
}
