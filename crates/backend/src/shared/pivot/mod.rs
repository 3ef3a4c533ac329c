pub mod salary_grid;

pub use salary_grid::SalaryGrid;
