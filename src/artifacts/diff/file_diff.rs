use crate::artifacts::diff::line_diff::{IDENTICAL, LineDiff, single_line_diff};

/// Outcome of comparing two line lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDiff {
    Identical,
    DiffersAt { line: usize, column: usize },
}

impl FileDiff {
    pub fn is_identical(&self) -> bool {
        matches!(self, FileDiff::Identical)
    }

    /// Integer pair form, `(IDENTICAL, IDENTICAL)` when nothing differs.
    pub fn as_pair(&self) -> (isize, isize) {
        match self {
            FileDiff::Identical => (IDENTICAL, IDENTICAL),
            FileDiff::DiffersAt { line, column } => (*line as isize, *column as isize),
        }
    }
}

/// Locate the first line, and the column within it, where two line lists
/// diverge.
///
/// If every paired line matches but one list is longer, the first extra
/// line is the divergence, at column 0. An empty list against a non-empty
/// one therefore yields `(0, 0)`.
pub fn multi_line_diff<S: AsRef<str>>(lines1: &[S], lines2: &[S]) -> FileDiff {
    let first_mismatch = lines1
        .iter()
        .zip(lines2)
        .enumerate()
        .find_map(|(line, (a, b))| match single_line_diff(a.as_ref(), b.as_ref()) {
            LineDiff::Identical => None,
            LineDiff::DiffersAt(column) => Some(FileDiff::DiffersAt { line, column }),
        });

    match first_mismatch {
        Some(diff) => diff,
        None if lines1.len() != lines2.len() => FileDiff::DiffersAt {
            line: lines1.len().min(lines2.len()),
            column: 0,
        },
        None => FileDiff::Identical,
    }
}
