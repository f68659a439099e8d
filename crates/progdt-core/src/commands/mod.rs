//! The command surface: render a stamp, then insert it.
//!
//! [`Progdt`] ties the pieces together. Each call reads the time mode once
//! from its [`SettingsStore`], takes one instant from its [`Clock`] (or the
//! request), formats it, and either returns the text or hands it to the
//! active target of an [`EditorHost`].
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   Settings   │──▶│              │   │              │   │  EditorHost  │
//! │ (mode, read  │   │    Progdt    │──▶│    Stamp     │──▶│ active target│
//! │  every call) │   │              │   │  (format)    │   │  insert_text │
//! │    Clock     │──▶│              │   │              │   │              │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use progdt_core::{
//!     clock::FixedClock,
//!     host::{TextBuffer, Workspace},
//!     models::CommandKind,
//!     settings::{MemorySettings, Settings},
//!     ProgdtBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let progdt = ProgdtBuilder::new()
//!     .with_settings_store(MemorySettings::new(Settings { utc: true }))
//!     .with_clock(FixedClock("2023-07-04T08:05:09.007Z".parse()?))
//!     .build()?;
//!
//! let mut workspace = Workspace::new();
//! workspace.open(TextBuffer::new("Released: "));
//!
//! progdt.run(CommandKind::Date, &mut workspace)?;
//! assert_eq!(workspace.active_buffer().unwrap().text(), "Released: 2023-07-04");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::sync::Arc;

use jiff::tz::TimeZone;
use log::debug;

pub mod builder;


pub use builder::ProgdtBuilder;

use crate::{
    clock::Clock,
    display::datetime::Stamp,
    error::{ProgdtError, Result},
    host::EditorHost,
    models::{CommandKind, TimeMode},
    params::StampRequest,
    settings::{Settings, SettingsStore},
};

/// Renders stamps and inserts them into editor hosts.
#[derive(Clone)]
pub struct Progdt {
    pub(crate) settings: Arc<dyn SettingsStore>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) local_zone: TimeZone,
    pub(crate) pinned_mode: Option<TimeMode>,
}

impl Progdt {
    /// The registered commands, in registration order.
    pub fn commands(&self) -> &'static [CommandKind] {
        &CommandKind::ALL
    }

    /// Zone used for [`TimeMode::Local`].
    pub fn local_zone(&self) -> &TimeZone {
        &self.local_zone
    }

    /// Mode the next stamp will use. Reads the settings store unless the
    /// mode was pinned at build time.
    pub fn time_mode(&self) -> Result<TimeMode> {
        match self.pinned_mode {
            Some(mode) => Ok(mode),
            None => Ok(self.settings.load()?.time_mode()),
        }
    }

    /// Current settings, straight from the store.
    pub fn settings(&self) -> Result<Settings> {
        self.settings.load()
    }

    /// Where settings are read from.
    pub fn settings_location(&self) -> String {
        self.settings.location()
    }

    /// Updates one option by key and persists the result.
    pub fn update_setting(&self, key: &str, value: &str) -> Result<Settings> {
        let mut settings = self.settings.load()?;
        settings.set(key, value)?;
        self.settings.save(&settings)?;
        debug!("setting '{key}' updated to '{value}'");
        Ok(settings)
    }

    /// Splits one instant under one mode.
    ///
    /// The request's `utc` wins over a pinned mode, which wins over the
    /// stored setting.
    pub fn stamp(&self, request: &StampRequest) -> Result<Stamp> {
        let mode = match request.mode_override() {
            Some(mode) => mode,
            None => self.time_mode()?,
        };
        let instant = match request.instant()? {
            Some(instant) => instant,
            None => self.clock.now(),
        };
        Ok(Stamp::new(instant, mode, &self.local_zone))
    }

    /// Renders `kind` for `request` without inserting it.
    pub fn render(&self, kind: CommandKind, request: &StampRequest) -> Result<String> {
        Ok(self.stamp(request)?.render(kind))
    }

    /// Renders `kind` for the current instant.
    pub fn render_now(&self, kind: CommandKind) -> Result<String> {
        self.render(kind, &StampRequest::default())
    }

    /// Runs a command against `host`: renders the stamp for now and inserts
    /// it into the active target.
    ///
    /// Returns the inserted text, or `None` when the host has no active
    /// target. That case is not an error.
    pub fn run(&self, kind: CommandKind, host: &mut dyn EditorHost) -> Result<Option<String>> {
        self.run_with(kind, &StampRequest::default(), host)
    }

    /// Like [`Progdt::run`] with an explicit request.
    pub fn run_with(
        &self,
        kind: CommandKind,
        request: &StampRequest,
        host: &mut dyn EditorHost,
    ) -> Result<Option<String>> {
        let text = self.render(kind, request)?;

        let Some(target) = host.active_target() else {
            debug!("{kind}: no active target, nothing inserted");
            return Ok(None);
        };

        target.insert_text(&text)?;
        debug!("{kind}: inserted '{text}'");
        Ok(Some(text))
    }

    /// Runs a command by its registered name, e.g. `progdt:datetime`.
    pub fn run_named(&self, name: &str, host: &mut dyn EditorHost) -> Result<Option<String>> {
        let kind = name
            .parse::<CommandKind>()
            .map_err(|_| ProgdtError::UnknownCommand {
                name: name.to_string(),
            })?;
        self.run(kind, host)
    }
}
