//! Feedback for insert operations.

use std::fmt;

/// Result of running a command against a host.
pub struct InsertResult<'a> {
    pub text: Option<&'a str>,
    pub target: &'a str,
}

impl<'a> InsertResult<'a> {
    /// Wraps the return value of `Progdt::run`.
    pub fn new(text: Option<&'a str>, target: &'a str) -> Self {
        Self { text, target }
    }

    pub fn inserted(&self) -> bool {
        self.text.is_some()
    }
}

impl<'a> fmt::Display for InsertResult<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text {
            Some(text) => writeln!(f, "Inserted `{text}` into {}", self.target),
            None => writeln!(f, "No active document; nothing inserted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_result_display() {
        let done = InsertResult::new(Some("2023-07-04"), "notes.md");
        assert!(done.inserted());
        assert_eq!(done.to_string(), "Inserted `2023-07-04` into notes.md\n");

        let skipped = InsertResult::new(None, "notes.md");
        assert!(!skipped.inserted());
        assert!(skipped.to_string().contains("nothing inserted"));
    }
}
