//! Collection wrapper types for command and setting listings.

use std::fmt;

use crate::{
    models::CommandKind,
    settings::{Settings, SETTINGS_SCHEMA},
};

/// Markdown listing of registered commands.
///
/// # Examples
///
/// ```rust
/// use progdt_core::{display::CommandList, models::CommandKind};
///
/// let output = CommandList(&CommandKind::ALL).to_string();
/// assert!(output.contains("`progdt:datetime`"));
/// ```
pub struct CommandList<'a>(pub &'a [CommandKind]);

impl<'a> fmt::Display for CommandList<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Commands")?;
        writeln!(f)?;

        if self.0.is_empty() {
            writeln!(f, "No commands registered.")?;
            return Ok(());
        }

        for kind in self.0 {
            writeln!(f, "- `{}`: {}", kind.command_name(), kind.description())?;
        }

        Ok(())
    }
}

/// Markdown view of the current settings next to their schema.
pub struct SettingsView<'a> {
    settings: &'a Settings,
    location: &'a str,
}

impl<'a> SettingsView<'a> {
    pub fn new(settings: &'a Settings, location: &'a str) -> Self {
        Self { settings, location }
    }
}

impl<'a> fmt::Display for SettingsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Settings")?;
        writeln!(f)?;
        writeln!(f, "**Location:** {}", self.location)?;
        writeln!(f)?;

        for schema in SETTINGS_SCHEMA {
            let value = self
                .settings
                .get(schema.key)
                .map(|value| value.to_string())
                .unwrap_or_else(|_| "unset".to_string());
            writeln!(
                f,
                "- **{}** ({}): {} (default: {})",
                schema.key, schema.title, value, schema.default
            )?;
            writeln!(f, "  {}", schema.description)?;
        }

        Ok(())
    }
}
