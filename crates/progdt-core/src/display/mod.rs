//! Display wrapper types for stamps and listings.
//!
//! Formatting lives in `Display` impls on small borrowing wrappers rather
//! than on the domain types, so the same data can be shown in different
//! contexts (a bare stamp for insertion, markdown for the terminal).
//!
//! ## Wrapper Types
//!
//! - [`datetime::DateStamp`], [`datetime::TimeStamp`],
//!   [`datetime::DateTimeStamp`]: the inserted stamps
//! - [`datetime::RawOffset`]: the `±HH:MM` suffix of local times
//! - [`CommandList`]: registered commands as markdown
//! - [`SettingsView`]: current settings next to their schema
//! - [`InsertResult`]: feedback after an insert
//!
//! ## Usage Examples
//!
//! ```rust
//! use jiff::tz::TimeZone;
//! use progdt_core::{display::datetime::Stamp, models::TimeMode};
//!
//! let instant = "2023-07-04T08:05:09.007Z".parse().unwrap();
//! let stamp = Stamp::new(instant, TimeMode::Utc, &TimeZone::system());
//!
//! assert_eq!(stamp.date().to_string(), "2023-07-04");
//! assert_eq!(stamp.datetime().to_string(), "2023-07-04T08:05:09.007+00:00");
//! ```

pub mod collections;
pub mod datetime;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{CommandList, SettingsView};
pub use datetime::{format_date, format_datetime, format_time, RawOffset, Stamp};
pub use status::InsertResult;
