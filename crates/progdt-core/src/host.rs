//! The slice of an editor host that progdt talks to.
//!
//! A host only has to answer two questions: which target is active, and
//! how to insert text into it. [`Workspace`] and [`TextBuffer`] are a
//! complete in-memory host; other hosts (files, remote editors) implement
//! the same two traits.

use std::ops::Range;

use crate::error::{ProgdtError, Result};

/// Something text can be inserted into.
pub trait TextTarget {
    /// Inserts `text` at the cursor, replacing the selection if there is one.
    fn insert_text(&mut self, text: &str) -> Result<()>;
}

/// An editor host with at most one active editable target.
pub trait EditorHost {
    /// The target commands write into, or `None` when nothing is open.
    fn active_target(&mut self) -> Option<&mut dyn TextTarget>;
}

/// An in-memory document with a cursor and an optional selection.
///
/// Positions are byte offsets into the text and must fall on `char`
/// boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
    selection: Option<Range<usize>>,
}

impl TextBuffer {
    /// Creates a buffer with the cursor at the end of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            text,
            cursor,
            selection: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Moves the cursor and clears the selection.
    pub fn set_cursor(&mut self, position: usize) -> Result<()> {
        self.check_position("cursor", position)?;
        self.cursor = position;
        self.selection = None;
        Ok(())
    }

    /// Selects `range`; the cursor moves to its end.
    pub fn select(&mut self, range: Range<usize>) -> Result<()> {
        if range.start > range.end {
            return Err(ProgdtError::invalid_input("selection")
                .with_reason(format!("start {} is after end {}", range.start, range.end)));
        }
        self.check_position("selection", range.start)?;
        self.check_position("selection", range.end)?;
        self.cursor = range.end;
        self.selection = Some(range);
        Ok(())
    }

    fn check_position(&self, field: &str, position: usize) -> Result<()> {
        if position > self.text.len() {
            return Err(ProgdtError::invalid_input(field).with_reason(format!(
                "position {position} is past the end of the text ({} bytes)",
                self.text.len()
            )));
        }
        if !self.text.is_char_boundary(position) {
            return Err(ProgdtError::invalid_input(field).with_reason(format!(
                "position {position} is not on a character boundary"
            )));
        }
        Ok(())
    }
}

impl TextTarget for TextBuffer {
    fn insert_text(&mut self, text: &str) -> Result<()> {
        let range = self
            .selection
            .take()
            .unwrap_or(self.cursor..self.cursor);
        self.text.replace_range(range.clone(), text);
        self.cursor = range.start + text.len();
        Ok(())
    }
}

/// A set of open buffers, one of which may be active.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    buffers: Vec<TextBuffer>,
    active: Option<usize>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `buffer` and makes it active. Returns its index.
    pub fn open(&mut self, buffer: TextBuffer) -> usize {
        self.buffers.push(buffer);
        let index = self.buffers.len() - 1;
        self.active = Some(index);
        index
    }

    /// Activates the buffer at `index`, or deactivates all with `None`.
    pub fn activate(&mut self, index: Option<usize>) -> Result<()> {
        if let Some(index) = index {
            if index >= self.buffers.len() {
                return Err(ProgdtError::invalid_input("buffer")
                    .with_reason(format!("no buffer at index {index}")));
            }
        }
        self.active = index;
        Ok(())
    }

    pub fn buffer(&self, index: usize) -> Option<&TextBuffer> {
        self.buffers.get(index)
    }

    pub fn buffer_mut(&mut self, index: usize) -> Option<&mut TextBuffer> {
        self.buffers.get_mut(index)
    }

    pub fn active_buffer(&self) -> Option<&TextBuffer> {
        self.active.and_then(|index| self.buffers.get(index))
    }
}

impl EditorHost for Workspace {
    fn active_target(&mut self) -> Option<&mut dyn TextTarget> {
        let index = self.active?;
        self.buffers
            .get_mut(index)
            .map(|buffer| buffer as &mut dyn TextTarget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_cursor() {
        let mut buffer = TextBuffer::new("Date: ");
        buffer.insert_text("2023-07-04").unwrap();
        assert_eq!(buffer.text(), "Date: 2023-07-04");
        assert_eq!(buffer.cursor(), buffer.text().len());

        buffer.set_cursor(0).unwrap();
        buffer.insert_text(">> ").unwrap();
        assert_eq!(buffer.text(), ">> Date: 2023-07-04");
        assert_eq!(buffer.cursor(), 3);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut buffer = TextBuffer::new("created: TODAY.");
        buffer.select(9..14).unwrap();
        buffer.insert_text("2023-07-04").unwrap();
        assert_eq!(buffer.text(), "created: 2023-07-04.");
        assert_eq!(buffer.selection(), None);
        assert_eq!(buffer.cursor(), 19);
        assert_eq!(buffer.into_text(), "created: 2023-07-04.");
    }

    #[test]
    fn test_positions_are_validated() {
        let mut buffer = TextBuffer::new("héllo");
        assert!(buffer.set_cursor(2).is_err());
        assert!(buffer.set_cursor(42).is_err());
        assert!(buffer.select(3..1).is_err());
        assert!(buffer.select(0..3).is_ok());
    }

    #[test]
    fn test_workspace_without_active_buffer() {
        let mut workspace = Workspace::new();
        assert!(workspace.active_target().is_none());

        let index = workspace.open(TextBuffer::default());
        assert!(workspace.active_target().is_some());

        workspace.activate(None).unwrap();
        assert!(workspace.active_target().is_none());
        assert!(workspace.activate(Some(index + 1)).is_err());
    }

    #[test]
    fn test_workspace_inserts_into_active_buffer_only() {
        let mut workspace = Workspace::new();
        let first = workspace.open(TextBuffer::new("a"));
        let second = workspace.open(TextBuffer::new("b"));

        workspace
            .active_target()
            .unwrap()
            .insert_text("!")
            .unwrap();
        assert_eq!(workspace.buffer(first).unwrap().text(), "a");
        assert_eq!(workspace.buffer(second).unwrap().text(), "b!");
        assert_eq!(workspace.active_buffer().unwrap().text(), "b!");
    }
}
