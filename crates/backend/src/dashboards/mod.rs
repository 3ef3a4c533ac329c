pub mod d500_payroll_overview;
pub mod d501_level_occupancy;
pub mod d502_role_levels;
