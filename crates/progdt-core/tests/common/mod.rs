use jiff::{
    tz::{Offset, TimeZone},
    Timestamp,
};
use progdt_core::{clock::FixedClock, Progdt, ProgdtBuilder};
use tempfile::TempDir;

/// The instant most tests stamp: 2023-07-04T08:05:09.007Z
pub fn test_instant() -> Timestamp {
    "2023-07-04T08:05:09.007Z"
        .parse()
        .expect("Failed to parse test instant")
}

/// A fixed zone `seconds` east of UTC
pub fn fixed_zone(seconds: i32) -> TimeZone {
    TimeZone::fixed(Offset::from_seconds(seconds).expect("Invalid offset"))
}

/// Helper function to create an instance with a settings file in a temp dir
pub fn create_test_progdt(zone: TimeZone) -> (TempDir, Progdt) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings_path = temp_dir.path().join("settings.json");
    let progdt = ProgdtBuilder::new()
        .with_settings_path(Some(&settings_path))
        .with_clock(FixedClock(test_instant()))
        .with_time_zone(Some(zone))
        .build()
        .expect("Failed to create progdt");
    (temp_dir, progdt)
}
