//! Command implementations
//!
//! Each command is an `impl Comparator` block:
//!
//! - `lines`: compare two lines given on the command line
//! - `files`: compare two files line by line
//!
//! Both print the same report shape, so the styling lives here.

pub mod files;
pub mod lines;

use crate::areas::comparator::Comparator;
use colored::Colorize;

impl Comparator {
    /// Print a `Line N:` header in bold.
    fn print_line_header(&self, header: &str) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", header.bold())?;

        Ok(())
    }

    /// Print a three-line single-line report, highlighting the `^` tip of
    /// the marker. The text is unchanged when color is off.
    fn print_single_line_report(&self, report: &str) -> anyhow::Result<()> {
        for (position, line) in report.lines().enumerate() {
            match (position, line.strip_suffix('^')) {
                (1, Some(fill)) => writeln!(self.writer(), "{}{}", fill, "^".red().bold())?,
                _ => writeln!(self.writer(), "{}", line)?,
            }
        }

        Ok(())
    }
}
