// Aggregate handlers (a001-a002)
pub mod a001_employee;
pub mod a002_level_cell;

// Dashboard handlers (d500-d502)
pub mod d500_payroll_overview;
pub mod d501_level_occupancy;
pub mod d502_role_levels;

// Session and snapshot handlers
pub mod highlight;
pub mod snapshot;
