pub mod grouper;

pub use grouper::{build_prefix_map, group_levels};
