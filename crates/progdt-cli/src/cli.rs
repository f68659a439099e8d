//! Command-line argument wrappers and their handlers
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, so `progdt-core` stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Progdt
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use progdt_core::{
    display::{CommandList, InsertResult, SettingsView},
    settings::SETTINGS_SCHEMA,
    CommandKind, InsertStamp, Progdt, StampRequest,
};

use crate::{document::FileHost, renderer::TerminalRenderer};

/// Options shared by the stamp printing commands
#[derive(Args)]
pub struct StampArgs {
    /// Instant to format instead of now: RFC 3339 (2023-07-04T08:05:09Z) or
    /// Unix epoch milliseconds
    #[arg(long, value_name = "TIME", allow_hyphen_values = true)]
    pub at: Option<String>,
}

impl From<StampArgs> for StampRequest {
    fn from(val: StampArgs) -> Self {
        StampRequest {
            at: val.at,
            utc: None,
        }
    }
}

/// Command-line names of the three stamps
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// YYYY-MM-DD
    Date,
    /// HH:MM:SS.FFF+HH:MM
    Time,
    /// YYYY-MM-DDTHH:MM:SS.FFF+HH:MM
    Datetime,
}

impl From<KindArg> for CommandKind {
    fn from(val: KindArg) -> Self {
        match val {
            KindArg::Date => CommandKind::Date,
            KindArg::Time => CommandKind::Time,
            KindArg::Datetime => CommandKind::DateTime,
        }
    }
}

/// Insert a stamp into a file
///
/// The file stands in for an editor document: the stamp is written at
/// `--offset` (a byte offset, end of file by default), replacing the bytes up
/// to `--end` when given. A missing file is treated as no open document and
/// nothing is written.
#[derive(Args)]
pub struct InsertArgs {
    /// Stamp to insert
    #[arg(value_enum)]
    pub kind: KindArg,
    /// File to insert into
    #[arg(short, long)]
    pub file: PathBuf,
    /// Byte offset of the cursor
    #[arg(short, long)]
    pub offset: Option<usize>,
    /// End of the selection to replace, starting at --offset
    #[arg(short, long, requires = "offset")]
    pub end: Option<usize>,
    #[command(flatten)]
    pub stamp: StampArgs,
}

impl InsertArgs {
    fn into_parts(self) -> (PathBuf, InsertStamp) {
        let params = InsertStamp {
            kind: self.kind.into(),
            offset: self.offset,
            end: self.end,
            request: self.stamp.into(),
        };
        (self.file, params)
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show all settings and where they are stored
    #[command(aliases = ["s", "ls"])]
    Show,
    /// Print the value of one setting
    Get {
        /// Setting key, e.g. utc
        key: String,
    },
    /// Change one setting
    Set {
        /// Setting key, e.g. utc
        key: String,
        /// New value, e.g. true
        value: String,
    },
    /// Print the settings schema as JSON
    Schema,
}

/// Handlers for CLI commands
pub struct Cli {
    progdt: Progdt,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(progdt: Progdt, renderer: TerminalRenderer) -> Self {
        Self { progdt, renderer }
    }

    /// Prints a stamp on its own line, unstyled so it can be piped.
    pub fn print_stamp(&self, kind: CommandKind, request: &StampRequest) -> Result<()> {
        let text = self
            .progdt
            .render(kind, request)
            .with_context(|| format!("Failed to render {kind}"))?;
        println!("{text}");
        Ok(())
    }

    pub fn insert(&self, args: InsertArgs) -> Result<()> {
        let (path, params) = args.into_parts();
        debug!("insert {} into {}", params.kind, path.display());

        let mut host = FileHost::open(&path)?;
        host.place_cursor(params.offset, params.end)?;

        let inserted = self
            .progdt
            .run_with(params.kind, &params.request, &mut host)
            .with_context(|| format!("Failed to run {}", params.kind))?;

        if inserted.is_some() {
            host.save()?;
        }

        let target = path.display().to_string();
        self.renderer
            .render(&InsertResult::new(inserted.as_deref(), &target).to_string())
    }

    pub fn handle_config_command(&self, command: ConfigCommands) -> Result<()> {
        match command {
            ConfigCommands::Show => {
                let settings = self.progdt.settings().context("Failed to load settings")?;
                let location = self.progdt.settings_location();
                self.renderer
                    .render(&SettingsView::new(&settings, &location).to_string())
            }
            ConfigCommands::Get { key } => {
                let settings = self.progdt.settings().context("Failed to load settings")?;
                let value = settings.get(&key)?;
                println!("{value}");
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                let settings = self
                    .progdt
                    .update_setting(&key, &value)
                    .with_context(|| format!("Failed to set '{key}'"))?;
                let location = self.progdt.settings_location();
                self.renderer
                    .render(&SettingsView::new(&settings, &location).to_string())
            }
            ConfigCommands::Schema => {
                let json = serde_json::to_string_pretty(SETTINGS_SCHEMA)
                    .context("Failed to serialize settings schema")?;
                println!("{json}");
                Ok(())
            }
        }
    }

    pub fn list_commands(&self) -> Result<()> {
        self.renderer
            .render(&CommandList(self.progdt.commands()).to_string())
    }
}
