pub mod config;
pub mod data;
pub mod error;
pub mod highlight;
pub mod levels;
pub mod pivot;
pub mod ranking;
