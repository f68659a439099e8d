//! The `utc` option and the stores it is read from.
//!
//! Settings are never cached: every formatting call goes back to its
//! [`SettingsStore`], so flipping `utc` takes effect on the next stamp.

use std::{
    fmt, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::RwLock,
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{ProgdtError, Result},
    models::TimeMode,
};

/// User configurable options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Render stamps in UTC instead of the local time zone
    pub utc: bool,
}

impl Settings {
    pub fn time_mode(&self) -> TimeMode {
        TimeMode::from_utc_flag(self.utc)
    }

    /// Looks up an option by key.
    pub fn get(&self, key: &str) -> Result<OptionValue> {
        match key {
            "utc" => Ok(OptionValue::Boolean(self.utc)),
            _ => Err(unknown_key(key)),
        }
    }

    /// Parses `value` according to the option's schema and stores it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let schema = OptionSchema::find(key).ok_or_else(|| unknown_key(key))?;
        match (key, schema.value_type.parse(key, value)?) {
            ("utc", OptionValue::Boolean(utc)) => self.utc = utc,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ProgdtError {
    ProgdtError::invalid_input("key").with_reason(format!("unknown setting '{key}'"))
}

/// Type of an option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Boolean,
}

impl ValueType {
    fn parse(self, key: &str, raw: &str) -> Result<OptionValue> {
        match self {
            ValueType::Boolean => match raw.trim().to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(OptionValue::Boolean(true)),
                "false" | "no" | "off" | "0" => Ok(OptionValue::Boolean(false)),
                _ => Err(ProgdtError::invalid_input(key)
                    .with_reason(format!("expected a boolean, got '{raw}'"))),
            },
        }
    }
}

/// A concrete option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Boolean(bool),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Boolean(value) => write!(f, "{value}"),
        }
    }
}

/// Declaration of one option, as shown to users and host configuration UIs.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptionSchema {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub default: OptionValue,
}

impl OptionSchema {
    pub fn find(key: &str) -> Option<&'static OptionSchema> {
        SETTINGS_SCHEMA.iter().find(|schema| schema.key == key)
    }
}

/// Every option progdt understands.
pub const SETTINGS_SCHEMA: &[OptionSchema] = &[OptionSchema {
    key: "utc",
    title: "Use UTC Time",
    description: "Whether or not to use the UTC time, or your timezone. Enabling this will \
                  ignore your timezone.",
    value_type: ValueType::Boolean,
    default: OptionValue::Boolean(false),
}];

/// Source of [`Settings`].
///
/// `load` is called once per formatting call; implementations must not
/// cache across calls.
pub trait SettingsStore: Send + Sync {
    /// Reads the current settings.
    fn load(&self) -> Result<Settings>;

    /// Persists `settings`.
    fn save(&self, settings: &Settings) -> Result<()>;

    /// Where the settings live, for display.
    fn location(&self) -> String;
}

/// Settings persisted as a JSON file.
///
/// A missing file yields the defaults. A malformed one is an error.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the default settings path following the XDG Base Directory
    /// specification: `$XDG_CONFIG_HOME/progdt/settings.json`.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("progdt")
            .place_config_file("settings.json")
            .map_err(|e| ProgdtError::XdgDirectory(e.to_string()))
    }
}

impl SettingsStore for FileSettings {
    fn load(&self) -> Result<Settings> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => return Err(ProgdtError::file_system(&self.path, e)),
        };

        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }

        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ProgdtError::file_system(parent, e))?;
        }

        let mut json = serde_json::to_string_pretty(settings)?;
        json.push('\n');
        fs::write(&self.path, json).map_err(|e| ProgdtError::file_system(&self.path, e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Settings held in memory, for embedding hosts and tests.
#[derive(Debug, Default)]
pub struct MemorySettings {
    inner: RwLock<Settings>,
}

impl MemorySettings {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: RwLock::new(settings),
        }
    }

    /// Flips the `utc` option.
    pub fn set_utc(&self, utc: bool) -> Result<()> {
        let mut settings = self.load()?;
        settings.utc = utc;
        self.save(&settings)
    }
}

impl SettingsStore for MemorySettings {
    fn load(&self) -> Result<Settings> {
        self.inner
            .read()
            .map(|settings| *settings)
            .map_err(|e| ProgdtError::Settings {
                message: format!("settings lock poisoned: {e}"),
            })
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let mut guard = self.inner.write().map_err(|e| ProgdtError::Settings {
            message: format!("settings lock poisoned: {e}"),
        })?;
        *guard = *settings;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
