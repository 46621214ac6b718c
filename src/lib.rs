//! First-difference finder for lines and files
//!
//! - `artifacts`: the diff engine and shared output utilities
//! - `areas`: file access and the comparator that writes reports
//! - `commands`: command implementations driven by the CLI

pub mod areas;
pub mod artifacts;
pub mod commands;
