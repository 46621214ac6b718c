//! Output utilities shared by the commands
//!
//! Reports go either straight to stdout or through the minus pager. The
//! choice is made once in `main`, and commands only see a `dyn Write`.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that disables paging when set to any value.
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this
/// wrapper adapts it for the comparator's writer slot.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let writer = PagerWriter::new(pager.clone());
/// let mut comparator = Comparator::new(&root, Box::new(writer))?;
/// comparator.diff_files(a, b, &splitter)?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Page only on an interactive stdout, unless paging was turned off by
/// flag or by `NO_PAGER`.
pub fn should_page(no_pager_flag: bool) -> bool {
    paging_enabled(
        no_pager_flag,
        std::env::var_os(NO_PAGER_ENV).is_some(),
        io::stdout().is_terminal(),
    )
}

fn paging_enabled(no_pager_flag: bool, no_pager_env: bool, stdout_is_terminal: bool) -> bool {
    !no_pager_flag && !no_pager_env && stdout_is_terminal
}
