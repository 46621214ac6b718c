//! First-difference diffing of lines and line lists
//!
//! - `line_diff`: character-level comparison of two single lines
//! - `file_diff`: line-level comparison of two line lists
//! - `format`: human-readable reports with a `===^` column marker
//! - `error`: reasons a report cannot be rendered
//!
//! Unlike a full edit-script diff, these routines stop at the first
//! divergence and report only its position.

pub mod error;
pub mod file_diff;
pub mod format;
pub mod line_diff;

pub use error::{FormatError, Side};
pub use file_diff::{FileDiff, multi_line_diff};
pub use format::{
    NO_DIFFERENCES, check_line, format_file_diff, format_line_pair_diff, format_single_line_diff,
    format_single_line_diff_or_empty, line_header,
};
pub use line_diff::{IDENTICAL, LineDiff, single_line_diff};
