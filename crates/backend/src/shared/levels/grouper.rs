use contracts::domain::a001_employee::Employee;
use contracts::domain::a002_level_cell::{Level, LevelCell};
use contracts::domain::common::level_code::code_prefix;
use contracts::domain::common::{code_number, compare_grades, compare_references, Category};
use std::collections::HashMap;

/// Phase 1: maps each stripped code to the prefixed code employees carry
/// ("58" -> "TEC58"). The last employee seen wins for a key.
pub fn build_prefix_map(employees: &[Employee]) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for employee in employees {
        let parsed = employee.parsed_code();
        let base = parsed.base_code();
        if base.is_empty() {
            continue;
        }
        map.insert(base.to_string(), parsed.code().to_string());
    }

    map
}

/// Phase 2: groups grid cells by stored base code and attaches the
/// reconstructed complete code and category.
///
/// The complete code comes from the employees using the level, then from the
/// prefix of the first cell's stored complete code, then the bare code.
///
/// Levels come out ordered by category label, then by the number formed by
/// the digits of the base code. Cells are ordered by grade, then reference.
pub fn group_levels(cells: &[LevelCell], employees: &[Employee]) -> Vec<Level> {
    let prefixes = build_prefix_map(employees);

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<LevelCell>> = Vec::new();

    for cell in cells {
        match index.get(cell.code.as_str()) {
            Some(&i) => groups[i].push(cell.clone()),
            None => {
                index.insert(cell.code.as_str(), groups.len());
                groups.push(vec![cell.clone()]);
            }
        }
    }

    let mut levels: Vec<Level> = groups
        .into_iter()
        .map(|mut cells| {
            cells.sort_by(|a, b| {
                compare_grades(&a.grade, &b.grade)
                    .then_with(|| compare_references(&a.reference, &b.reference))
            });

            let code = cells[0].code.clone();
            let complete_code = prefixes
                .get(&code)
                .cloned()
                .or_else(|| stored_complete_code(&cells[0]))
                .unwrap_or_else(|| code.clone());
            let category = Category::from_code(&complete_code);

            Level {
                code,
                complete_code,
                category,
                cells,
            }
        })
        .collect();

    levels.sort_by(|a, b| {
        a.category
            .cmp_label(&b.category)
            .then_with(|| code_number(&a.code).cmp(&code_number(&b.code)))
    });

    tracing::debug!("Grouped {} cells into {} levels", cells.len(), levels.len());
    levels
}

/// Stored prefix glued to the stored base code ("SEG16" on a "16" row -> "SEG16")
fn stored_complete_code(cell: &LevelCell) -> Option<String> {
    let stored = cell.complete_code.as_deref()?;
    if stored == cell.code {
        return None;
    }
    let prefix = code_prefix(stored);
    if prefix.is_empty() {
        return None;
    }
    Some(format!("{}{}", prefix, cell.code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_employee::EmployeeId;
    use contracts::domain::a002_level_cell::LevelCellId;

    fn employee(id: i64, level_code: &str) -> Employee {
        Employee {
            id: EmployeeId(id),
            name: format!("Servidor {}", id),
            role: "Agente".into(),
            level_code: level_code.into(),
            level_code_clean: None,
            salary: 1000.0,
            level_id: None,
        }
    }

    fn cell(id: i64, code: &str, grade: &str, reference: &str, salary: f64) -> LevelCell {
        LevelCell {
            id: LevelCellId(id),
            code: code.into(),
            complete_code: None,
            grade: grade.into(),
            reference: reference.into(),
            salary,
        }
    }

    #[test]
    fn test_prefix_map_last_wins_and_skips_empty() {
        let employees = vec![
            employee(1, "TEC58-III-E"),
            employee(2, "ADM58-I-A"),
            employee(3, "CC"),
            employee(4, ""),
            employee(5, "SEG16-IIA"),
        ];
        let map = build_prefix_map(&employees);
        assert_eq!(map.get("58").map(String::as_str), Some("ADM58"));
        assert_eq!(map.get("16").map(String::as_str), Some("SEG16"));
        // "CC" strips to nothing
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_groups_by_stored_code() {
        let cells = vec![
            cell(1, "58", "II", "A", 2600.0),
            cell(2, "16", "I", "A", 1900.0),
            cell(3, "58", "I", "B", 2550.0),
            cell(4, "58", "I", "A", 2500.0),
        ];
        let employees = vec![employee(1, "TEC58-I-A"), employee(2, "SEG16-I-A")];

        let levels = group_levels(&cells, &employees);
        assert_eq!(levels.len(), 2);

        // "Segurança" < "Técnico"
        assert_eq!(levels[0].complete_code, "SEG16");
        assert_eq!(levels[0].category, Category::Security);
        assert_eq!(levels[1].complete_code, "TEC58");
        assert_eq!(levels[1].category, Category::Technical);

        let order: Vec<(&str, &str)> = levels[1]
            .cells
            .iter()
            .map(|c| (c.grade.as_str(), c.reference.as_str()))
            .collect();
        assert_eq!(order, vec![("I", "A"), ("I", "B"), ("II", "A")]);
    }

    #[test]
    fn test_unused_level_keeps_bare_code() {
        let cells = vec![cell(1, "70", "I", "A", 9000.0), cell(2, "58", "I", "A", 2500.0)];
        let levels = group_levels(&cells, &[employee(1, "TEC58-I-A")]);

        let unused = levels.iter().find(|l| l.code == "70").unwrap();
        assert_eq!(unused.complete_code, "70");
        assert_eq!(unused.category, Category::Other);
    }

    #[test]
    fn test_unused_level_takes_stored_prefix() {
        let mut stored = cell(1, "16", "I", "A", 1900.0);
        stored.complete_code = Some("SEG16".into());

        let levels = group_levels(&[stored], &[]);
        assert_eq!(levels[0].complete_code, "SEG16");
        assert_eq!(levels[0].category, Category::Security);
    }

    #[test]
    fn test_employee_prefix_beats_stored_prefix() {
        let mut stored = cell(1, "58", "I", "A", 2500.0);
        stored.complete_code = Some("ADM58".into());
        let mut bare = cell(2, "12", "I", "A", 1.0);
        bare.complete_code = Some("12".into());

        let levels = group_levels(&[stored, bare], &[employee(1, "TEC58-I-A")]);
        let tec = levels.iter().find(|l| l.code == "58").unwrap();
        assert_eq!(tec.complete_code, "TEC58");

        // Stored code without a prefix falls back to the bare code
        let other = levels.iter().find(|l| l.code == "12").unwrap();
        assert_eq!(other.complete_code, "12");
        assert_eq!(other.category, Category::Other);
    }

    #[test]
    fn test_same_category_orders_by_code_number() {
        let cells = vec![
            cell(1, "100", "I", "A", 1.0),
            cell(2, "9", "I", "A", 1.0),
            cell(3, "20", "I", "A", 1.0),
        ];
        let levels = group_levels(&cells, &[]);
        let codes: Vec<&str> = levels.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["9", "20", "100"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(group_levels(&[], &[employee(1, "TEC58-I-A")]).is_empty());
    }
}
