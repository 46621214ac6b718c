use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Rules for turning file content into a list of terminator-free lines.
///
/// Content is split on `\n`. A trailing `\r` is stripped from each line, so
/// CRLF files compare equal to LF files, and any stray `\r` is dropped. A
/// final newline does not produce an extra empty line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct LineSplitter {
    skip_blank: bool,
}

impl LineSplitter {
    pub fn skip_blank(&self) -> bool {
        self.skip_blank
    }

    pub fn split(&self, content: &str) -> Vec<String> {
        content
            .lines()
            .map(|line| line.replace('\r', ""))
            .filter(|line| !(self.skip_blank && line.is_empty()))
            .collect()
    }
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Resolve `file_path` against the workspace root; absolute paths are
    /// kept as they are.
    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.resolve(file_path);

        let content = std::fs::read_to_string(&file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(content)
    }

    pub fn read_lines(
        &self,
        file_path: &Path,
        splitter: &LineSplitter,
    ) -> anyhow::Result<Vec<String>> {
        let content = self.read_file(file_path)?;
        let lines = splitter.split(&content);

        tracing::debug!(
            path = %file_path.display(),
            bytes = content.len(),
            lines = lines.len(),
            skip_blank = splitter.skip_blank(),
            "read file lines"
        );

        Ok(lines)
    }
}
