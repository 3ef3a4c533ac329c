use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Coarse classification of a salary level, derived from its code prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Security,
    OperationalServices,
    Health,
    Technical,
    SpecializedTechnical,
    Administrative,
    Superior,
    Activities,
    CommissionedPosition,
    Other,
}

/// How a rule matches the upper-cased complete code
#[derive(Debug, Clone, Copy)]
enum CodeMatch {
    Prefix(&'static str),
    Exact(&'static str),
}

impl CodeMatch {
    fn matches(&self, code: &str) -> bool {
        match self {
            CodeMatch::Prefix(prefix) => code.starts_with(prefix),
            CodeMatch::Exact(value) => code == *value,
        }
    }
}

/// Checked in order, first match wins.
const CATEGORY_RULES: &[(CodeMatch, Category)] = &[
    (CodeMatch::Prefix("SEG"), Category::Security),
    (CodeMatch::Prefix("SOP"), Category::OperationalServices),
    (CodeMatch::Prefix("SAU"), Category::Health),
    (CodeMatch::Prefix("TEC"), Category::Technical),
    (CodeMatch::Prefix("TEP"), Category::SpecializedTechnical),
    (CodeMatch::Prefix("ADM"), Category::Administrative),
    (CodeMatch::Prefix("SUP"), Category::Superior),
    (CodeMatch::Prefix("ACT"), Category::Activities),
    (CodeMatch::Exact("CC"), Category::CommissionedPosition),
    (CodeMatch::Exact("CCCC"), Category::CommissionedPosition),
];

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Security,
        Category::OperationalServices,
        Category::Health,
        Category::Technical,
        Category::SpecializedTechnical,
        Category::Administrative,
        Category::Superior,
        Category::Activities,
        Category::CommissionedPosition,
        Category::Other,
    ];

    /// Categorize a complete (prefixed) level code
    pub fn from_code(complete_code: &str) -> Self {
        let code = complete_code.trim().to_uppercase();
        CATEGORY_RULES
            .iter()
            .find(|(rule, _)| rule.matches(&code))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Other)
    }

    /// Display label used by the dashboard (and as the sort key for levels)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Security => "Segurança",
            Category::OperationalServices => "Serviços Operacionais",
            Category::Health => "Saúde",
            Category::Technical => "Técnico",
            Category::SpecializedTechnical => "Técnico Especializado",
            Category::Administrative => "Administrativo",
            Category::Superior => "Superior",
            Category::Activities => "Atividades",
            Category::CommissionedPosition => "Cargo em Comissão",
            Category::Other => "Outros",
        }
    }

    /// Lexicographic order of the display labels
    pub fn cmp_label(&self, other: &Category) -> Ordering {
        self.label().cmp(other.label())
    }
}
