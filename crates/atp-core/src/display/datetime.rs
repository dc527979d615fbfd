//! DateTime display utilities.
//!
//! Plan documents carry timestamps as free text. Values that parse as RFC 3339
//! instants are shown in the system time zone; anything else is shown as
//! written.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a document timestamp as `YYYY-MM-DD HH:MM:SS TZ` when it parses,
/// otherwise verbatim.
pub struct LocalDateTime<'a>(pub &'a str);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.parse::<Timestamp>() {
            Ok(ts) => write!(
                f,
                "{}",
                ts.to_zoned(TimeZone::system())
                    .strftime("%Y-%m-%d %H:%M:%S %Z")
            ),
            Err(_) => f.write_str(self.0),
        }
    }
}

/// Elapsed time between two document timestamps, e.g. `1h 5m 3s`.
///
/// `None` unless both parse and `end` is not before `start`.
pub fn elapsed(start: &str, end: &str) -> Option<String> {
    let start = start.parse::<Timestamp>().ok()?;
    let end = end.parse::<Timestamp>().ok()?;
    let secs = end.duration_since(start).as_secs();
    if secs < 0 {
        return None;
    }

    let (hours, minutes, seconds) = (secs / 3600, secs % 3600 / 60, secs % 60);
    Some(match (hours, minutes) {
        (0, 0) => format!("{seconds}s"),
        (0, _) => format!("{minutes}m {seconds}s"),
        _ => format!("{hours}h {minutes}m {seconds}s"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparseable_timestamp_is_verbatim() {
        assert_eq!(LocalDateTime("last tuesday").to_string(), "last tuesday");
        assert_eq!(LocalDateTime("").to_string(), "");
    }

    #[test]
    fn test_parseable_timestamp_is_reformatted() {
        let shown = LocalDateTime("2024-06-15T12:00:00Z").to_string();
        assert!(shown.starts_with("2024-06-1"));
        assert_ne!(shown, "2024-06-15T12:00:00Z");
    }

    #[test]
    fn test_elapsed() {
        assert_eq!(
            elapsed("2024-06-15T12:00:00Z", "2024-06-15T13:05:03Z").as_deref(),
            Some("1h 5m 3s")
        );
        assert_eq!(
            elapsed("2024-06-15T12:00:00Z", "2024-06-15T12:00:42Z").as_deref(),
            Some("42s")
        );
        assert_eq!(
            elapsed("2024-06-15T12:00:00Z", "2024-06-15T12:02:00Z").as_deref(),
            Some("2m 0s")
        );
        assert_eq!(elapsed("2024-06-15T13:00:00Z", "2024-06-15T12:00:00Z"), None);
        assert_eq!(elapsed("soon", "2024-06-15T12:00:00Z"), None);
    }
}
