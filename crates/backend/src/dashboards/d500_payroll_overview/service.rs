use contracts::dashboards::d500_payroll_overview::{
    CategoryShare, CountEntry, GradeReferenceEntry, PayrollKpis, PayrollMassEntry,
    PayrollOverviewResponse, SalaryBracketEntry, TopSalaryEntry,
};
use contracts::domain::a001_employee::Employee;
use contracts::domain::a002_level_cell::LevelCell;
use contracts::domain::common::Category;
use contracts::shared::format::truncate_label;
use std::collections::HashSet;

use crate::shared::data::snapshot::{self, Snapshot};
use crate::shared::error::DashboardError;
use crate::shared::ranking::{count_by, sum_by, top_n};

const TOP_LEVELS: usize = 15;
const TOP_ROLES: usize = 10;
const TOP_GRADE_REFERENCES: usize = 20;
const TOP_SALARIES: usize = 10;
const TOP_PAYROLL_ROLES: usize = 10;
const NAME_MAX_CHARS: usize = 25;

/// Fixed salary brackets: (label, inclusive min, exclusive max)
const SALARY_BRACKETS: [(&str, f64, Option<f64>); 7] = [
    ("< R$ 2k", 0.0, Some(2000.0)),
    ("R$ 2k - 3k", 2000.0, Some(3000.0)),
    ("R$ 3k - 4k", 3000.0, Some(4000.0)),
    ("R$ 4k - 5k", 4000.0, Some(5000.0)),
    ("R$ 5k - 7k", 5000.0, Some(7000.0)),
    ("R$ 7k - 10k", 7000.0, Some(10000.0)),
    ("> R$ 10k", 10000.0, None),
];

/// Overview of the current snapshot
pub fn get_overview() -> Result<PayrollOverviewResponse, DashboardError> {
    let snapshot = snapshot::current()?;
    Ok(build_overview(&snapshot))
}

pub fn build_overview(snapshot: &Snapshot) -> PayrollOverviewResponse {
    let employees = &snapshot.employees;

    PayrollOverviewResponse {
        kpis: compute_kpis(employees),
        by_level: distribution_by_level(employees),
        by_role: distribution_by_role(employees),
        salary_brackets: salary_brackets(employees),
        grade_reference: grade_reference_distribution(&snapshot.cells),
        top_salaries: top_salaries(employees),
        payroll_by_role: payroll_by_role(employees),
        categories: category_distribution(employees),
        loaded_at: snapshot.loaded_at.to_rfc3339(),
    }
}

// ============================================================================
// KPI cards
// ============================================================================

pub fn compute_kpis(employees: &[Employee]) -> PayrollKpis {
    let total = employees.len();
    let payroll_mass: f64 = employees.iter().map(|e| e.salary).sum();
    let distinct_levels = employees
        .iter()
        .map(|e| e.level_code.as_str())
        .collect::<HashSet<_>>()
        .len();

    let (min_salary, max_salary) = if employees.is_empty() {
        (0.0, 0.0)
    } else {
        employees.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), e| {
            (lo.min(e.salary), hi.max(e.salary))
        })
    };

    PayrollKpis {
        total_employees: total,
        payroll_mass,
        mean_salary: if total > 0 {
            payroll_mass / total as f64
        } else {
            0.0
        },
        distinct_levels,
        min_salary,
        max_salary,
    }
}

// ============================================================================
// Charts
// ============================================================================

/// Employees per raw level code, top 15
pub fn distribution_by_level(employees: &[Employee]) -> Vec<CountEntry> {
    ranked_counts(count_by(employees, |e| e.level_code.clone()), TOP_LEVELS)
}

/// Employees per role, top 10
pub fn distribution_by_role(employees: &[Employee]) -> Vec<CountEntry> {
    ranked_counts(count_by(employees, |e| e.role.clone()), TOP_ROLES)
}

fn ranked_counts(counts: Vec<(String, usize)>, limit: usize) -> Vec<CountEntry> {
    let entries: Vec<CountEntry> = counts
        .into_iter()
        .map(|(label, count)| CountEntry { label, count })
        .collect();
    top_n(entries, limit, |e: &CountEntry| e.count as f64)
}

/// Every employee lands in exactly one of the seven brackets
pub fn salary_brackets(employees: &[Employee]) -> Vec<SalaryBracketEntry> {
    let mut counts = [0usize; SALARY_BRACKETS.len()];

    for employee in employees {
        let idx = SALARY_BRACKETS
            .iter()
            .position(|(_, _, max)| max.map_or(true, |m| employee.salary < m))
            .unwrap_or(SALARY_BRACKETS.len() - 1);
        counts[idx] += 1;
    }

    SALARY_BRACKETS
        .iter()
        .zip(counts)
        .map(|((label, min, max), count)| SalaryBracketEntry {
            label: (*label).to_string(),
            min: *min,
            max: *max,
            count,
        })
        .collect()
}

/// Grid cells per (grade, reference) pair, top 20
pub fn grade_reference_distribution(cells: &[LevelCell]) -> Vec<GradeReferenceEntry> {
    let pairs = count_by(cells, |c| (c.grade.clone(), c.reference.clone()));
    let entries: Vec<GradeReferenceEntry> = pairs
        .into_iter()
        .map(|((grade, reference), count)| GradeReferenceEntry {
            grade,
            reference,
            count,
        })
        .collect();
    top_n(entries, TOP_GRADE_REFERENCES, |e: &GradeReferenceEntry| {
        e.count as f64
    })
}

pub fn top_salaries(employees: &[Employee]) -> Vec<TopSalaryEntry> {
    let entries: Vec<TopSalaryEntry> = employees
        .iter()
        .map(|e| TopSalaryEntry {
            name: truncate_label(&e.name, NAME_MAX_CHARS),
            role: e.role.clone(),
            salary: e.salary,
        })
        .collect();
    top_n(entries, TOP_SALARIES, |e: &TopSalaryEntry| e.salary)
}

pub fn payroll_by_role(employees: &[Employee]) -> Vec<PayrollMassEntry> {
    let entries: Vec<PayrollMassEntry> = sum_by(employees, |e| e.role.clone(), |e| e.salary)
        .into_iter()
        .map(|(role, mass)| PayrollMassEntry { role, mass })
        .collect();
    top_n(entries, TOP_PAYROLL_ROLES, |e: &PayrollMassEntry| e.mass)
}

/// Employees per category of their level code, with one-decimal percentages
pub fn category_distribution(employees: &[Employee]) -> Vec<CategoryShare> {
    if employees.is_empty() {
        return Vec::new();
    }

    let total = employees.len() as f64;
    let counts = count_by(employees, |e| Category::from_code(e.parsed_code().code()));
    let entries: Vec<CategoryShare> = counts
        .into_iter()
        .map(|(category, count)| CategoryShare {
            category,
            label: category.label().to_string(),
            count,
            percent: (count as f64 / total * 1000.0).round() / 10.0,
        })
        .collect();
    top_n(entries, Category::ALL.len(), |e: &CategoryShare| {
        e.count as f64
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_employee::EmployeeId;
    use contracts::domain::a002_level_cell::LevelCellId;

    fn employee(id: i64, name: &str, role: &str, level_code: &str, salary: f64) -> Employee {
        Employee {
            id: EmployeeId(id),
            name: name.into(),
            role: role.into(),
            level_code: level_code.into(),
            level_code_clean: None,
            salary,
            level_id: None,
        }
    }

    fn staff() -> Vec<Employee> {
        vec![
            employee(1, "Ana", "Agente", "TEC58-I-A", 1999.99),
            employee(2, "Bruno", "Guarda", "SEG16-II-B", 2000.0),
            employee(3, "Carla", "Agente", "TEC58-I-A", 4500.0),
            employee(4, "Davi", "Médico", "SAU12-III-C", 12000.0),
            employee(5, "Eva", "Guarda", "SEG16-I-A", 10000.0),
            employee(6, "Fábio", "Assessor", "CC", 6999.0),
        ]
    }

    #[test]
    fn test_kpis() {
        let kpis = compute_kpis(&staff());
        assert_eq!(kpis.total_employees, 6);
        assert!((kpis.payroll_mass - 37498.99).abs() < 1e-6);
        assert_eq!(kpis.distinct_levels, 5);
        assert_eq!(kpis.min_salary, 1999.99);
        assert_eq!(kpis.max_salary, 12000.0);
    }

    #[test]
    fn test_kpis_empty() {
        let kpis = compute_kpis(&[]);
        assert_eq!(kpis.total_employees, 0);
        assert_eq!(kpis.mean_salary, 0.0);
        assert_eq!(kpis.min_salary, 0.0);
        assert_eq!(kpis.max_salary, 0.0);
    }

    #[test]
    fn test_brackets_partition_every_employee() {
        let employees = staff();
        let brackets = salary_brackets(&employees);
        assert_eq!(brackets.len(), 7);
        assert_eq!(brackets.iter().map(|b| b.count).sum::<usize>(), employees.len());

        let counts: Vec<usize> = brackets.iter().map(|b| b.count).collect();
        // 1999.99 | 2000 | - | 4500 | 6999 | - | 10000, 12000
        assert_eq!(counts, vec![1, 1, 0, 1, 1, 0, 2]);
        assert_eq!(brackets[6].max, None);
    }

    #[test]
    fn test_role_distribution_ties_keep_input_order() {
        let by_role = distribution_by_role(&staff());
        let labels: Vec<&str> = by_role.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Agente", "Guarda", "Médico", "Assessor"]);
    }

    #[test]
    fn test_level_distribution_is_bounded() {
        let employees: Vec<Employee> = (0..40)
            .map(|i| employee(i, "X", "Agente", &format!("TEC{}-I-A", i % 20), 1000.0))
            .collect();
        let by_level = distribution_by_level(&employees);
        assert_eq!(by_level.len(), 15);
        assert!(by_level.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_top_salaries_truncates_names() {
        let mut employees = staff();
        employees.push(employee(
            7,
            "Maria Aparecida dos Santos Oliveira",
            "Diretora",
            "SUP70-I-A",
            20000.0,
        ));
        let top = top_salaries(&employees);
        assert_eq!(top[0].name, "Maria Aparecida dos Santo...");
        assert_eq!(top[1].salary, 12000.0);
        assert!(top.len() <= 10);
    }

    #[test]
    fn test_payroll_by_role() {
        let mass = payroll_by_role(&staff());
        assert_eq!(mass[0].role, "Guarda");
        assert_eq!(mass[0].mass, 12000.0);
        // Médico ties with Guarda and comes later in the input
        assert_eq!(mass[1].role, "Médico");
    }

    #[test]
    fn test_grade_reference_counts_grid_cells() {
        let cell = |grade: &str, reference: &str| LevelCell {
            id: LevelCellId(0),
            code: "58".into(),
            complete_code: None,
            grade: grade.into(),
            reference: reference.into(),
            salary: 1.0,
        };
        let cells = vec![cell("I", "A"), cell("I", "B"), cell("I", "A"), cell("II", "A")];
        let dist = grade_reference_distribution(&cells);
        assert_eq!(dist[0].grade, "I");
        assert_eq!(dist[0].reference, "A");
        assert_eq!(dist[0].count, 2);
        assert_eq!(dist.len(), 3);
    }

    #[test]
    fn test_category_distribution() {
        let shares = category_distribution(&staff());
        assert_eq!(shares[0].category, Category::Technical);
        assert_eq!(shares[0].count, 2);
        assert_eq!(shares[0].percent, 33.3);
        let commissioned = shares
            .iter()
            .find(|s| s.category == Category::CommissionedPosition)
            .unwrap();
        assert_eq!(commissioned.percent, 16.7);
        assert!(category_distribution(&[]).is_empty());
    }
}
