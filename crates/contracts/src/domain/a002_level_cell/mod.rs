pub mod aggregate;
pub mod dto;
pub mod level;

pub use aggregate::*;
pub use dto::*;
pub use level::*;
