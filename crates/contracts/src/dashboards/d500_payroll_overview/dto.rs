use serde::{Deserialize, Serialize};

use crate::domain::common::Category;

/// Response for the payroll overview dashboard (KPI cards + charts)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollOverviewResponse {
    pub kpis: PayrollKpis,
    /// Employees per raw level code, top 15
    pub by_level: Vec<CountEntry>,
    /// Employees per role, top 10
    pub by_role: Vec<CountEntry>,
    /// All seven salary brackets, in bracket order
    pub salary_brackets: Vec<SalaryBracketEntry>,
    /// Grid cells per (grade, reference) pair, top 20
    pub grade_reference: Vec<GradeReferenceEntry>,
    /// Highest salaries, top 10
    pub top_salaries: Vec<TopSalaryEntry>,
    /// Sum of salaries per role, top 10
    pub payroll_by_role: Vec<PayrollMassEntry>,
    pub categories: Vec<CategoryShare>,
    /// Snapshot timestamp (RFC 3339)
    pub loaded_at: String,
}

/// Headline numbers of the KPI cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollKpis {
    pub total_employees: usize,
    /// Sum of all salaries
    pub payroll_mass: f64,
    /// 0 when there are no employees
    pub mean_salary: f64,
    /// Distinct raw level codes in use
    pub distinct_levels: usize,
    pub min_salary: f64,
    pub max_salary: f64,
}

/// Label/count pair for bar and pie charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBracketEntry {
    pub label: String,
    /// Inclusive lower bound
    pub min: f64,
    /// Exclusive upper bound, `None` for the open last bracket
    pub max: Option<f64>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeReferenceEntry {
    pub grade: String,
    pub reference: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSalaryEntry {
    /// Display name, cut at 25 characters
    pub name: String,
    pub role: String,
    pub salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollMassEntry {
    pub role: String,
    pub mass: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    pub label: String,
    pub count: usize,
    /// Share of all employees, one decimal place
    pub percent: f64,
}
