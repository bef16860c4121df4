//! Observation timestamp composition.
//!
//! AirNow splits the observation time across three fields: a date string
//! (with a trailing space), an integer hour, and a zone abbreviation. This
//! module folds them into one `DateTime<FixedOffset>`.
//!
//! Zone abbreviations are not globally unique ("CST" is also China Standard
//! Time). The table below only covers the abbreviations AirNow reports for
//! US, Canadian and territorial monitors; anything else is rejected rather
//! than guessed.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

use crate::model::TimestampError;

const HOUR: i32 = 3600;

/// Known zone abbreviations and their UTC offsets, in hours.
static ZONE_OFFSETS: &[(&str, i32)] = &[
    ("UTC", 0),
    ("GMT", 0),
    ("Z", 0),
    ("AST", -4),
    ("ADT", -3),
    ("EST", -5),
    ("EDT", -4),
    ("CST", -6),
    ("CDT", -5),
    ("MST", -7),
    ("MDT", -6),
    ("PST", -8),
    ("PDT", -7),
    ("AKST", -9),
    ("AKDT", -8),
    ("HST", -10),
    ("HAST", -10),
    ("HADT", -9),
    ("SST", -11),
    ("CHST", 10),
];

/// Resolve a zone abbreviation to a fixed offset.
pub fn zone_offset(abbreviation: &str) -> Option<FixedOffset> {
    let abbreviation = abbreviation.trim();
    ZONE_OFFSETS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(abbreviation))
        .and_then(|&(_, hours)| FixedOffset::east_opt(hours * HOUR))
}

/// Compose `date` (`YYYY-MM-DD`, surrounding whitespace ignored), `hour`
/// (0-23) and `zone` into a timestamp.
///
/// `("2023-01-01 ", 14, "PST")` is 2023-01-01 14:00 at UTC-8.
pub fn parse_observed(
    date: &str,
    hour: i32,
    zone: &str,
) -> Result<DateTime<FixedOffset>, TimestampError> {
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| TimestampError::InvalidDate(date.to_string()))?;

    let naive = u32::try_from(hour)
        .ok()
        .and_then(|h| day.and_hms_opt(h, 0, 0))
        .ok_or(TimestampError::InvalidHour(hour))?;

    let offset =
        zone_offset(zone).ok_or_else(|| TimestampError::UnknownTimeZone(zone.to_string()))?;

    // A fixed offset never yields an ambiguous or skipped local time.
    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or(TimestampError::InvalidHour(hour))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Utc};

    #[test]
    fn composes_date_hour_and_zone() {
        let t = parse_observed("2023-01-01 ", 14, "PST").unwrap();
        assert_eq!(t.to_rfc3339(), "2023-01-01T14:00:00-08:00");
        assert_eq!(t.with_timezone(&Utc).hour(), 22);
    }

    #[test]
    fn daylight_abbreviations_use_their_own_offset() {
        let t = parse_observed("2024-07-04", 9, "EDT").unwrap();
        assert_eq!(t.offset().local_minus_utc(), -4 * 3600);

        let t = parse_observed("2024-07-04", 9, "akdt").unwrap();
        assert_eq!(t.offset().local_minus_utc(), -8 * 3600);
    }

    #[test]
    fn midnight_and_last_hour_are_valid() {
        assert!(parse_observed("2023-03-12", 0, "CST").is_ok());
        assert!(parse_observed("2023-03-12", 23, "CST").is_ok());
    }

    #[test]
    fn rejects_unknown_zone() {
        assert_eq!(
            parse_observed("2023-01-01", 14, "???"),
            Err(TimestampError::UnknownTimeZone("???".to_string()))
        );
        assert!(matches!(
            parse_observed("2023-01-01", 14, ""),
            Err(TimestampError::UnknownTimeZone(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_hour() {
        assert_eq!(
            parse_observed("2023-01-01", 24, "PST"),
            Err(TimestampError::InvalidHour(24))
        );
        assert_eq!(
            parse_observed("2023-01-01", -1, "PST"),
            Err(TimestampError::InvalidHour(-1))
        );
    }

    #[test]
    fn rejects_malformed_date() {
        for bad in ["", "2023-13-01", "01/02/2023", "2023-02-30"] {
            assert!(
                matches!(parse_observed(bad, 1, "UTC"), Err(TimestampError::InvalidDate(_))),
                "{:?} should not parse",
                bad
            );
        }
    }
}
