use crate::areas::comparator::Comparator;
use crate::artifacts::diff::{
    LineDiff, NO_DIFFERENCES, Side, check_line, format_single_line_diff, single_line_diff,
};

impl Comparator {
    /// Compare two lines and print where they first diverge.
    ///
    /// Both lines are checked for terminators up front, so identical
    /// malformed input is an error too.
    pub fn diff_lines(&mut self, line1: &str, line2: &str) -> anyhow::Result<LineDiff> {
        check_line(line1, Side::First)?;
        check_line(line2, Side::Second)?;

        let diff = single_line_diff(line1, line2);
        tracing::debug!(index = diff.as_index(), "compared lines");

        match diff {
            LineDiff::Identical => write!(self.writer(), "{NO_DIFFERENCES}")?,
            LineDiff::DiffersAt(index) => {
                let report = format_single_line_diff(line1, line2, index as isize)?;
                self.print_single_line_report(&report)?;
            }
        }

        Ok(diff)
    }
}
