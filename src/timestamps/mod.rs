//! Conversions between calendar date-time text and the epoch-millisecond
//! integers the image service speaks.
//!
//! Naive text (no offset in the pattern) is read as UTC unless a
//! [`TimeZonePolicy::Local`] is asked for explicitly. The map pipeline labels
//! its slider in UTC, so both pipelines agree under the default policy.

pub mod error;

use crate::timestamps::error::TimeError;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Pattern used by [`from_epoch_millis`] and for slider labels.
pub const ISO_UTC_PATTERN: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Pattern of the `"2024-05-20 12:00:00"` style inputs used in the demos.
pub const DEFAULT_INPUT_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// How a naive (offset-less) date-time string is pinned to an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZonePolicy {
    /// Treat the wall-clock text as UTC.
    #[default]
    Utc,
    /// Treat the wall-clock text as the host's local time zone.
    Local,
}

/// Parses `text` with a chrono `strftime` `pattern` into epoch milliseconds,
/// reading the wall-clock time as UTC.
///
/// # Examples
///
/// ```
/// use imagery_series::to_epoch_millis;
///
/// let ms = to_epoch_millis("2024-05-20 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(ms, 1_716_206_400_000);
/// ```
///
/// # Errors
///
/// Returns [`TimeError::Parse`] when `text` does not match `pattern`.
pub fn to_epoch_millis(text: &str, pattern: &str) -> Result<i64, TimeError> {
    to_epoch_millis_with(text, pattern, TimeZonePolicy::Utc)
}

/// Same as [`to_epoch_millis`] with an explicit [`TimeZonePolicy`].
///
/// # Errors
///
/// Returns [`TimeError::Parse`] when `text` does not match `pattern`, and
/// [`TimeError::AmbiguousLocalTime`] when the local wall-clock time falls in
/// a DST gap or fold.
pub fn to_epoch_millis_with(
    text: &str,
    pattern: &str,
    policy: TimeZonePolicy,
) -> Result<i64, TimeError> {
    let naive =
        NaiveDateTime::parse_from_str(text, pattern).map_err(|source| TimeError::Parse {
            text: text.to_string(),
            pattern: pattern.to_string(),
            source,
        })?;

    match policy {
        TimeZonePolicy::Utc => Ok(naive.and_utc().timestamp_millis()),
        TimeZonePolicy::Local => Local
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.timestamp_millis())
            .ok_or_else(|| TimeError::AmbiguousLocalTime(text.to_string())),
    }
}

/// Converts epoch milliseconds into a UTC `DateTime`.
///
/// # Errors
///
/// Returns [`TimeError::OutOfRange`] for values chrono cannot represent.
pub fn datetime_from_epoch_millis(ms: i64) -> Result<DateTime<Utc>, TimeError> {
    DateTime::<Utc>::from_timestamp_millis(ms).ok_or(TimeError::OutOfRange(ms))
}

/// Formats epoch milliseconds as `YYYY-MM-DDTHH:MM:SSZ`.
///
/// Sub-second precision is dropped.
///
/// # Errors
///
/// Returns [`TimeError::OutOfRange`] for values chrono cannot represent.
pub fn from_epoch_millis(ms: i64) -> Result<String, TimeError> {
    Ok(datetime_from_epoch_millis(ms)?
        .format(ISO_UTC_PATTERN)
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_instant_as_utc() {
        let ms = to_epoch_millis("2024-05-20 12:00:00", DEFAULT_INPUT_PATTERN).unwrap();
        let expected = Utc
            .with_ymd_and_hms(2024, 5, 20, 12, 0, 0)
            .unwrap()
            .timestamp()
            * 1000;
        assert_eq!(ms, expected);
        assert_eq!(ms, 1_716_206_400_000);
    }

    #[test]
    fn test_round_trip_utc_text() {
        for text in [
            "2024-05-20T12:00:00Z",
            "1970-01-01T00:00:00Z",
            "2023-12-31T23:59:59Z",
        ] {
            let ms = to_epoch_millis(text, ISO_UTC_PATTERN).unwrap();
            assert_eq!(from_epoch_millis(ms).unwrap(), text);
        }
    }

    #[test]
    fn test_parse_failure_is_reported() {
        let err = to_epoch_millis("20/05/2024", DEFAULT_INPUT_PATTERN).unwrap_err();
        match err {
            TimeError::Parse { text, pattern, .. } => {
                assert_eq!(text, "20/05/2024");
                assert_eq!(pattern, DEFAULT_INPUT_PATTERN);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_local_policy_matches_chrono_local() {
        let text = "2024-01-15 08:30:00";
        let ms = to_epoch_millis_with(text, DEFAULT_INPUT_PATTERN, TimeZonePolicy::Local).unwrap();
        let naive = NaiveDateTime::parse_from_str(text, DEFAULT_INPUT_PATTERN).unwrap();
        let expected = Local.from_local_datetime(&naive).unwrap().timestamp_millis();
        assert_eq!(ms, expected);
    }

    #[test]
    fn test_millis_are_truncated_in_labels() {
        assert_eq!(
            from_epoch_millis(1_716_206_400_999).unwrap(),
            "2024-05-20T12:00:00Z"
        );
    }

    #[test]
    fn test_out_of_range_millis() {
        assert!(matches!(
            from_epoch_millis(i64::MAX),
            Err(TimeError::OutOfRange(i64::MAX))
        ));
    }
}
