use crate::artifacts::diff::error::{FormatError, Side};
use crate::artifacts::diff::file_diff::{FileDiff, multi_line_diff};

pub const NO_DIFFERENCES: &str = "No differences\n";

const MARKER_FILL: char = '=';
const MARKER_TIP: char = '^';

/// Reject a line that still carries a `\n` or `\r`.
pub fn check_line(line: &str, side: Side) -> Result<(), FormatError> {
    if line.contains(['\n', '\r']) {
        return Err(FormatError::MalformedLineInput { side });
    }

    Ok(())
}

/// Render the three-line report pointing at column `index`:
///
/// ```text
/// cat
/// ===^
/// cats
/// ```
///
/// `index` must lie in `[0, min(len(line1), len(line2))]` and neither line
/// may contain `\n` or `\r`.
pub fn format_single_line_diff(
    line1: &str,
    line2: &str,
    index: isize,
) -> Result<String, FormatError> {
    check_line(line1, Side::First)?;
    check_line(line2, Side::Second)?;

    let max = line1.chars().count().min(line2.chars().count());
    let width = usize::try_from(index)
        .ok()
        .filter(|width| *width <= max)
        .ok_or(FormatError::IndexOutOfRange { index, max })?;

    let mut marker = MARKER_FILL.to_string().repeat(width);
    marker.push(MARKER_TIP);

    Ok(format!("{line1}\n{marker}\n{line2}\n"))
}

/// Like [`format_single_line_diff`], but signals failure with an empty
/// string.
pub fn format_single_line_diff_or_empty(line1: &str, line2: &str, index: isize) -> String {
    format_single_line_diff(line1, line2, index).unwrap_or_default()
}

/// Report the first difference between two line lists.
///
/// Returns [`NO_DIFFERENCES`] for identical input, otherwise a `Line N:`
/// header followed by the single-line report. A list that ends before the
/// differing line contributes an empty line.
pub fn format_file_diff<S: AsRef<str>>(
    lines1: &[S],
    lines2: &[S],
) -> Result<String, FormatError> {
    match multi_line_diff(lines1, lines2) {
        FileDiff::Identical => Ok(NO_DIFFERENCES.to_string()),
        FileDiff::DiffersAt { line, column } => {
            let body = format_line_pair_diff(lines1, lines2, line, column)?;

            Ok(format!("{}\n{body}", line_header(line)))
        }
    }
}

/// Header naming the differing line, without its trailing newline.
pub fn line_header(line: usize) -> String {
    format!("Line {line}:")
}

/// Single-line report for the pair of lines at `line`. A list that ends
/// before `line` contributes an empty line.
pub fn format_line_pair_diff<S: AsRef<str>>(
    lines1: &[S],
    lines2: &[S],
    line: usize,
    column: usize,
) -> Result<String, FormatError> {
    let line1 = lines1.get(line).map_or("", |l| l.as_ref());
    let line2 = lines2.get(line).map_or("", |l| l.as_ref());

    format_single_line_diff(line1, line2, column as isize)
}
