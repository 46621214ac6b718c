use crate::areas::comparator::Comparator;
use crate::areas::workspace::LineSplitter;
use crate::artifacts::diff::{
    FileDiff, NO_DIFFERENCES, format_line_pair_diff, line_header, multi_line_diff,
};
use anyhow::Context;
use std::path::Path;

impl Comparator {
    /// Compare two files line by line and print where they first diverge.
    pub fn diff_files(
        &mut self,
        file1: &Path,
        file2: &Path,
        splitter: &LineSplitter,
    ) -> anyhow::Result<FileDiff> {
        let lines1 = self.workspace().read_lines(file1, splitter)?;
        let lines2 = self.workspace().read_lines(file2, splitter)?;

        let diff = multi_line_diff(&lines1, &lines2);

        match diff {
            FileDiff::Identical => {
                tracing::info!("files are identical");
                write!(self.writer(), "{NO_DIFFERENCES}")?;
            }
            FileDiff::DiffersAt { line, column } => {
                tracing::info!(line, column, "files differ");
                let body =
                    format_line_pair_diff(&lines1, &lines2, line, column).with_context(|| {
                        format!(
                            "Unable to format difference between {} and {}",
                            file1.display(),
                            file2.display()
                        )
                    })?;
                self.print_line_header(&line_header(line))?;
                self.print_single_line_report(&body)?;
            }
        }

        Ok(diff)
    }
}
