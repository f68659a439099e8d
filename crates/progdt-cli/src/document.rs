//! A file on disk presented as an editor host.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::debug;
use progdt_core::{EditorHost, TextBuffer, TextTarget};

/// Host whose only document is a file. A missing file means no document is
/// open.
pub struct FileHost {
    path: PathBuf,
    buffer: Option<TextBuffer>,
}

impl FileHost {
    /// Loads the file at `path`, if it exists.
    pub fn open(path: &Path) -> Result<Self> {
        let buffer = match fs::read_to_string(path) {
            Ok(text) => Some(TextBuffer::new(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist, no document open", path.display());
                None
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            buffer,
        })
    }

    /// Places the cursor at `offset`, or selects `offset..end`. Without an
    /// offset the cursor stays at the end of the file.
    pub fn place_cursor(&mut self, offset: Option<usize>, end: Option<usize>) -> Result<()> {
        let Some(buffer) = self.buffer.as_mut() else {
            return Ok(());
        };

        match (offset, end) {
            (Some(start), Some(end)) => buffer.select(start..end)?,
            (Some(start), None) => buffer.set_cursor(start)?,
            (None, _) => {}
        }
        Ok(())
    }

    /// Writes the buffer back to the file.
    pub fn save(&self) -> Result<()> {
        let Some(buffer) = &self.buffer else {
            return Ok(());
        };

        fs::write(&self.path, buffer.text())
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

impl EditorHost for FileHost {
    fn active_target(&mut self) -> Option<&mut dyn TextTarget> {
        self.buffer
            .as_mut()
            .map(|buffer| buffer as &mut dyn TextTarget)
    }
}
