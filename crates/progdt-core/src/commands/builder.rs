//! Builder for creating and configuring Progdt instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use jiff::tz::TimeZone;

use super::Progdt;
use crate::{
    clock::{Clock, SystemClock},
    error::Result,
    models::TimeMode,
    settings::{FileSettings, SettingsStore},
};

/// Builder for creating and configuring Progdt instances.
#[derive(Clone, Default)]
pub struct ProgdtBuilder {
    settings_path: Option<PathBuf>,
    settings: Option<Arc<dyn SettingsStore>>,
    clock: Option<Arc<dyn Clock>>,
    local_zone: Option<TimeZone>,
    pinned_mode: Option<TimeMode>,
}

impl ProgdtBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom settings file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/progdt/settings.json` or
    /// `~/.config/progdt/settings.json`
    pub fn with_settings_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.settings_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses `store` instead of a settings file.
    pub fn with_settings_store(mut self, store: impl SettingsStore + 'static) -> Self {
        self.settings = Some(Arc::new(store));
        self
    }

    /// Uses `clock` as the source of "now". Defaults to the system clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Sets the zone used for local time. Defaults to the system zone.
    pub fn with_time_zone(mut self, zone: Option<TimeZone>) -> Self {
        if let Some(zone) = zone {
            self.local_zone = Some(zone);
        }
        self
    }

    /// Pins the time mode, ignoring the stored `utc` setting.
    pub fn with_time_mode(mut self, mode: Option<TimeMode>) -> Self {
        if let Some(mode) = mode {
            self.pinned_mode = Some(mode);
        }
        self
    }

    /// Builds the configured instance.
    ///
    /// # Errors
    ///
    /// Returns `ProgdtError::XdgDirectory` if no settings store was given and
    /// the default settings path cannot be determined
    pub fn build(self) -> Result<Progdt> {
        let settings: Arc<dyn SettingsStore> = match (self.settings, self.settings_path) {
            (Some(store), _) => store,
            (None, Some(path)) => Arc::new(FileSettings::new(path)),
            (None, None) => Arc::new(FileSettings::new(FileSettings::default_path()?)),
        };

        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock),
        };

        Ok(Progdt {
            settings,
            clock,
            local_zone: self.local_zone.unwrap_or_else(TimeZone::system),
            pinned_mode: self.pinned_mode,
        })
    }
}
