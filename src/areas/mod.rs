//! Components that sit around the diff engine
//!
//! - `comparator`: owns the output sink and coordinates the commands
//! - `workspace`: file system access and line splitting

pub mod comparator;
pub mod workspace;
