/// Sentinel index reported when no difference exists.
pub const IDENTICAL: isize = -1;

/// Outcome of comparing two single lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDiff {
    Identical,
    /// Zero-based character offset of the first divergence.
    DiffersAt(usize),
}

impl LineDiff {
    pub fn is_identical(&self) -> bool {
        matches!(self, LineDiff::Identical)
    }

    /// Integer form of the result, with [`IDENTICAL`] for no difference.
    pub fn as_index(&self) -> isize {
        match self {
            LineDiff::Identical => IDENTICAL,
            LineDiff::DiffersAt(index) => *index as isize,
        }
    }
}

/// Find the first character position where `line1` and `line2` diverge.
///
/// When one line is a strict prefix of the other, the divergence is at the
/// end of the shorter line. Positions count `char`s, not bytes.
pub fn single_line_diff(line1: &str, line2: &str) -> LineDiff {
    let mut a = line1.chars();
    let mut b = line2.chars();
    let mut index = 0;

    loop {
        match (a.next(), b.next()) {
            (None, None) => return LineDiff::Identical,
            (Some(x), Some(y)) if x == y => index += 1,
            _ => return LineDiff::DiffersAt(index),
        }
    }
}
