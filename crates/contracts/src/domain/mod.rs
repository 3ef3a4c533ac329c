pub mod a001_employee;
pub mod a002_level_cell;
pub mod common;
