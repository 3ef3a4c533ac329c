pub mod aggregate;
pub mod dto;

pub use aggregate::*;
pub use dto::*;
