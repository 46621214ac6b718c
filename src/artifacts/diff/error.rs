use std::fmt;

/// Which of the two compared inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

/// Reasons a single-line diff cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A line handed to the formatter still carries a line terminator.
    #[error("{side} line contains a newline or carriage return")]
    MalformedLineInput { side: Side },

    /// The marker index lies outside `[0, max]`.
    #[error("difference index {index} is out of range 0..={max}")]
    IndexOutOfRange { index: isize, max: usize },
}
