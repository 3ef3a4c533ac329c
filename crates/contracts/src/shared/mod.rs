pub mod format;
pub mod highlight;
pub mod pivot;
