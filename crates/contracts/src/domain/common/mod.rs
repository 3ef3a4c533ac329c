//! Level code rules shared by every payroll dashboard

pub mod category;
pub mod level_code;
pub mod ordering;

// Re-exports
pub use category::Category;
pub use level_code::ParsedCode;
pub use ordering::{code_number, compare_grades, compare_references, natural_cmp};
