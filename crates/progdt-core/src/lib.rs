//! Core library for progdt, ISO-8601 date and time stamps for editors.
//!
//! This crate renders the current date, time, or datetime as
//!
//! - `YYYY-MM-DD`
//! - `HH:MM:SS.FFF±HH:MM`
//! - `YYYY-MM-DDTHH:MM:SS.FFF±HH:MM`
//!
//! in either UTC or the local time zone, and inserts the result into the
//! active target of an editor host.
//!
//! # Layout
//!
//! - **Formatting** ([`display::datetime`]): pure functions and `Display`
//!   wrappers over one instant in one frame
//! - **Settings** ([`settings`]): the `utc` option, read fresh on every call
//! - **Hosts** ([`host`]): the two operations progdt needs from an editor
//! - **Commands** ([`commands`]): [`Progdt`], which ties them together
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::tz::TimeZone;
//! use progdt_core::{
//!     clock::FixedClock, models::CommandKind, settings::MemorySettings, ProgdtBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let progdt = ProgdtBuilder::new()
//!     .with_settings_store(MemorySettings::default())
//!     .with_clock(FixedClock("2023-07-04T08:05:09.007Z".parse()?))
//!     .with_time_zone(Some(TimeZone::posix("EST5EDT,M3.2.0,M11.1.0")?))
//!     .build()?;
//!
//! assert_eq!(
//!     progdt.render_now(CommandKind::DateTime)?,
//!     "2023-07-04T04:05:09.007-04:00"
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod clock;
pub mod commands;
pub mod display;
pub mod error;
pub mod host;
pub mod models;
pub mod params;
pub mod settings;

// Re-export commonly used types
pub use commands::{Progdt, ProgdtBuilder};
pub use display::{format_date, format_datetime, format_time, RawOffset, Stamp};
pub use error::{ProgdtError, Result};
pub use host::{EditorHost, TextBuffer, TextTarget, Workspace};
pub use models::{CommandKind, TimeMode};
pub use params::{InsertStamp, StampRequest};
pub use settings::{FileSettings, MemorySettings, Settings, SettingsStore};
