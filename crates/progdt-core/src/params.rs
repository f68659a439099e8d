//! Parameter structures for progdt operations
//!
//! These structures are shared by the CLI and the MCP server. They carry no
//! framework derives beyond serde; interface layers wrap them with their own
//! (clap arguments in the CLI, `JsonSchema` behind the `schema` feature).
//!
//! ```text
//! CLI Args (clap) ──┐
//!                   ├──▶ Core Params ──▶ Progdt
//! MCP Params (serde)┘
//! ```

use jiff::{
    fmt::strtime,
    tz::{Offset, TimeZone},
    Timestamp,
};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ProgdtError, Result},
    models::{CommandKind, TimeMode},
};

/// Parameters for rendering one stamp.
///
/// Both fields are optional: without `at` the clock supplies "now", without
/// `utc` the stored setting decides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StampRequest {
    /// Instant to format, as an RFC 3339 timestamp (e.g.
    /// `2023-07-04T08:05:09.007Z`) or Unix epoch milliseconds
    #[serde(default)]
    pub at: Option<String>,
    /// Force UTC (`true`) or local time (`false`) for this request only
    #[serde(default)]
    pub utc: Option<bool>,
}

impl StampRequest {
    /// Parses `at`, if present.
    pub fn instant(&self) -> Result<Option<Timestamp>> {
        self.at.as_deref().map(parse_instant).transpose()
    }

    pub fn mode_override(&self) -> Option<TimeMode> {
        self.utc.map(TimeMode::from_utc_flag)
    }
}

/// Parameters for inserting a stamp into a document at a byte position.
#[derive(Debug, Clone)]
pub struct InsertStamp {
    pub kind: CommandKind,
    /// Byte offset of the cursor; end of the document when absent
    pub offset: Option<usize>,
    /// End of the selection to replace, starting at `offset`
    pub end: Option<usize>,
    pub request: StampRequest,
}

/// Parses an instant given as RFC 3339 or as Unix epoch milliseconds.
///
/// ```rust
/// use progdt_core::params::parse_instant;
///
/// let a = parse_instant("2023-07-04T08:05:09.007Z").unwrap();
/// let b = parse_instant("1688457909007").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_instant(raw: &str) -> Result<Timestamp> {
    let raw = raw.trim();

    if let Ok(millis) = raw.parse::<i64>() {
        return Timestamp::from_millisecond(millis).map_err(|e| {
            ProgdtError::invalid_input("at").with_reason(format!("'{raw}' is out of range: {e}"))
        });
    }

    raw.parse::<Timestamp>().map_err(|e| {
        ProgdtError::invalid_input("at")
            .with_reason(format!("'{raw}' is not an RFC 3339 timestamp: {e}"))
    })
}

/// Resolves a time zone from `UTC`, a fixed offset (`+05:30`, `-08`,
/// `+0545`), or an IANA name (`Europe/Berlin`).
pub fn parse_time_zone(raw: &str) -> Result<TimeZone> {
    let raw = raw.trim();

    if raw.eq_ignore_ascii_case("utc") || raw.eq_ignore_ascii_case("z") {
        return Ok(TimeZone::UTC);
    }

    if raw.starts_with('+') || raw.starts_with('-') {
        return parse_fixed_offset(raw).map(TimeZone::fixed);
    }

    TimeZone::get(raw).map_err(|source| ProgdtError::TimeZone {
        name: raw.to_string(),
        source,
    })
}

fn parse_fixed_offset(raw: &str) -> Result<Offset> {
    let parsed = strtime::parse("%:::z", raw)
        .or_else(|_| strtime::parse("%z", raw))
        .map_err(|e| {
            ProgdtError::invalid_input("tz")
                .with_reason(format!("'{raw}' is not an offset like +05:30: {e}"))
        })?;

    parsed.offset().ok_or_else(|| {
        ProgdtError::invalid_input("tz").with_reason(format!("'{raw}' has no offset"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instant_forms() {
        let rfc = parse_instant("2023-07-04T08:05:09.007Z").unwrap();
        assert_eq!(rfc.as_millisecond(), 1_688_457_909_007);
        assert_eq!(parse_instant(" 0 ").unwrap(), Timestamp::UNIX_EPOCH);
        assert_eq!(
            parse_instant("2023-07-04T10:05:09.007+02:00").unwrap(),
            rfc
        );
        assert!(parse_instant("yesterday").is_err());
        assert!(parse_instant("2023-07-04").is_err());
    }

    #[test]
    fn test_parse_fixed_offsets() {
        let zone = parse_time_zone("+05:30").unwrap();
        let offset = zone.to_offset(Timestamp::UNIX_EPOCH);
        assert_eq!(offset.seconds(), 19_800);

        let zone = parse_time_zone("-08").unwrap();
        assert_eq!(zone.to_offset(Timestamp::UNIX_EPOCH).seconds(), -28_800);

        let zone = parse_time_zone("+0545").unwrap();
        assert_eq!(zone.to_offset(Timestamp::UNIX_EPOCH).seconds(), 20_700);

        let zone = parse_time_zone("-0930").unwrap();
        assert_eq!(zone.to_offset(Timestamp::UNIX_EPOCH).seconds(), -34_200);

        for rejected in ["+5", "+5:3", "+05:75", "+ab", "+123", "+99:00"] {
            assert!(
                matches!(
                    parse_time_zone(rejected),
                    Err(ProgdtError::InvalidInput { ref field, .. }) if field == "tz"
                ),
                "{rejected} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_utc_aliases() {
        for raw in ["UTC", "utc", "Z"] {
            let zone = parse_time_zone(raw).unwrap();
            assert_eq!(zone.to_offset(Timestamp::UNIX_EPOCH).seconds(), 0);
        }
    }

    #[test]
    fn test_unknown_zone_name() {
        assert!(matches!(
            parse_time_zone("Mars/Olympus_Mons"),
            Err(ProgdtError::TimeZone { .. })
        ));
    }

    #[test]
    fn test_stamp_request_accessors() {
        let request = StampRequest {
            at: Some("1688457909007".to_string()),
            utc: Some(true),
        };
        assert!(request.instant().unwrap().is_some());
        assert_eq!(request.mode_override(), Some(TimeMode::Utc));

        let empty = StampRequest::default();
        assert!(empty.instant().unwrap().is_none());
        assert_eq!(empty.mode_override(), None);
    }
}
