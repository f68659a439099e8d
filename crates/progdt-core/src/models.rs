//! Data models for time modes and commands.
//!
//! [`TimeMode`] selects the calendar frame an instant is decomposed in and
//! [`CommandKind`] names the three stamps progdt knows how to insert.
//!
//! # Examples
//!
//! ```rust
//! use progdt_core::models::{CommandKind, TimeMode};
//!
//! assert_eq!(TimeMode::from_utc_flag(true), TimeMode::Utc);
//! assert_eq!("progdt:time".parse::<CommandKind>(), Ok(CommandKind::Time));
//! assert_eq!(CommandKind::DateTime.command_name(), "progdt:datetime");
//! ```

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Prefix shared by every registered command name.
pub const COMMAND_NAMESPACE: &str = "progdt";

/// Calendar frame used to split an instant into fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    /// Fields are read in the local time zone and an offset is appended
    #[default]
    Local,

    /// Fields are read in UTC and the offset is always `+00:00`
    Utc,
}

impl TimeMode {
    /// Maps the boolean `utc` setting to a mode.
    pub fn from_utc_flag(utc: bool) -> Self {
        if utc {
            TimeMode::Utc
        } else {
            TimeMode::Local
        }
    }

    pub fn is_utc(self) -> bool {
        self == TimeMode::Utc
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeMode::Local => "local",
            TimeMode::Utc => "utc",
        }
    }
}

impl FromStr for TimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(TimeMode::Local),
            "utc" => Ok(TimeMode::Utc),
            _ => Err(format!("Invalid time mode: {s}")),
        }
    }
}

impl fmt::Display for TimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The stamps that can be rendered and inserted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    /// `YYYY-MM-DD`
    Date,
    /// `HH:MM:SS.FFF±HH:MM`
    Time,
    /// `YYYY-MM-DDTHH:MM:SS.FFF±HH:MM`
    DateTime,
}

impl CommandKind {
    /// Every command, in registration order.
    pub const ALL: [CommandKind; 3] = [CommandKind::Date, CommandKind::Time, CommandKind::DateTime];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Date => "date",
            CommandKind::Time => "time",
            CommandKind::DateTime => "datetime",
        }
    }

    /// Fully qualified name the command is registered under, e.g.
    /// `progdt:date`.
    pub fn command_name(&self) -> &'static str {
        match self {
            CommandKind::Date => "progdt:date",
            CommandKind::Time => "progdt:time",
            CommandKind::DateTime => "progdt:datetime",
        }
    }

    /// Short human description used in command listings.
    pub fn description(&self) -> &'static str {
        match self {
            CommandKind::Date => "Insert the current date (YYYY-MM-DD)",
            CommandKind::Time => "Insert the current time (HH:MM:SS.FFF+HH:MM)",
            CommandKind::DateTime => {
                "Insert the current date and time (YYYY-MM-DDTHH:MM:SS.FFF+HH:MM)"
            }
        }
    }
}

/// Accepts both the bare kind (`date`) and the qualified command name
/// (`progdt:date`).
impl FromStr for CommandKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        let bare = match lowered.split_once(':') {
            Some((COMMAND_NAMESPACE, rest)) => rest,
            Some(_) => return Err(format!("Invalid command: {s}")),
            None => lowered.as_str(),
        };

        match bare {
            "date" => Ok(CommandKind::Date),
            "time" => Ok(CommandKind::Time),
            "datetime" => Ok(CommandKind::DateTime),
            _ => Err(format!("Invalid command: {s}")),
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_name())
    }
}
