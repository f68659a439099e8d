use std::path::PathBuf;

use clap::{Parser, Subcommand};
use progdt_core::TimeMode;

use crate::cli::{ConfigCommands, InsertArgs, StampArgs};

/// Insert ISO-8601 date and time stamps
///
/// progdt prints or inserts the current date (`YYYY-MM-DD`), time
/// (`HH:MM:SS.FFF+HH:MM`) or datetime (`YYYY-MM-DDTHH:MM:SS.FFF+HH:MM`) in
/// local time or UTC. Whether UTC is used is controlled by the `utc` setting,
/// which can be overridden per invocation with `--utc` or `--local`.
#[derive(Parser)]
#[command(version, about, name = "progdt")]
pub struct Args {
    /// Path to the settings file. Defaults to
    /// $XDG_CONFIG_HOME/progdt/settings.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use UTC for this invocation, ignoring the `utc` setting
    #[arg(long, global = true, conflicts_with = "local")]
    pub utc: bool,

    /// Use local time for this invocation, ignoring the `utc` setting
    #[arg(long, global = true)]
    pub local: bool,

    /// Zone used for local time: an IANA name, UTC, or an offset like +05:30.
    /// Defaults to the system time zone
    #[arg(long, global = true, value_name = "ZONE", allow_hyphen_values = true)]
    pub tz: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Mode pinned by `--utc`/`--local`, if any.
    pub fn time_mode(&self) -> Option<TimeMode> {
        if self.utc {
            Some(TimeMode::Utc)
        } else if self.local {
            Some(TimeMode::Local)
        } else {
            None
        }
    }
}

/// Available commands for the progdt CLI
///
/// - `date`, `time`, `datetime`: print a stamp
/// - `insert`: write a stamp into a file at a byte offset
/// - `config`: inspect and change settings
/// - `commands`: list the registered command names
/// - `serve`: start the MCP server
#[derive(Subcommand)]
pub enum Commands {
    /// Print the date (YYYY-MM-DD)
    #[command(alias = "d")]
    Date(StampArgs),
    /// Print the time (HH:MM:SS.FFF+HH:MM)
    #[command(alias = "t")]
    Time(StampArgs),
    /// Print the date and time (YYYY-MM-DDTHH:MM:SS.FFF+HH:MM)
    #[command(alias = "dt")]
    Datetime(StampArgs),
    /// Insert a stamp into a file
    #[command(alias = "i")]
    Insert(InsertArgs),
    /// View or change settings
    #[command(alias = "c")]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// List the registered commands
    #[command(name = "commands", alias = "ls")]
    List,
    /// Start the MCP server
    Serve,
}
