//! Diff data structures and algorithms
//!
//! - `core`: shared output utilities (pager wrapper)
//! - `diff`: first-difference engine and report formatting

pub mod core;
pub mod diff;
