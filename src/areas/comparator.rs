use crate::areas::workspace::Workspace;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Entry point for the diff commands.
///
/// Owns the output sink and the workspace that file paths resolve against.
/// The command implementations live in `crate::commands`.
pub struct Comparator {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
}

impl Comparator {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Invalid working directory {}", path.display()))?;

        Ok(Comparator {
            writer: RefCell::new(writer),
            workspace: Workspace::new(path.into_boxed_path()),
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Comparator;
    use std::io::Write;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    /// In-memory writer whose contents stay readable after the comparator
    /// takes ownership of a clone.
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    pub(crate) fn comparator_in(path: &Path) -> (Comparator, SharedBuffer) {
        colored::control::set_override(false);
        let buffer = SharedBuffer::default();
        let comparator = Comparator::new(path, Box::new(buffer.clone()))
            .expect("Failed to create comparator");
        (comparator, buffer)
    }
}
