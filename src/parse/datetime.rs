use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// A parsed upstream timestamp that remembers whether the wire value carried
/// a time-of-day component. Date-only values are what mark an event as
/// all-day, and that distinction is unrecoverable after lowering to an
/// instant (midnight and "unspecified" look the same), so it is captured
/// here at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stamp {
    DateTime(NaiveDateTime),
    DateOnly(NaiveDate),
}

impl Stamp {
    /// Lower to an instant; date-only stamps become midnight of that day
    pub fn instant(self) -> NaiveDateTime {
        match self {
            Stamp::DateTime(dt) => dt,
            Stamp::DateOnly(d) => d.and_time(chrono::NaiveTime::MIN),
        }
    }

    pub fn is_date_only(self) -> bool {
        matches!(self, Stamp::DateOnly(_))
    }
}

/// Parse an ISO-8601 timestamp from the task service.
///
/// Accepts date-only values (`2025-03-10`), local date-times with or without
/// seconds and fractions (`2025-03-10T09:00`, `2025-03-10 09:00:00.123`),
/// and RFC 3339 values with an offset (folded to the UTC wall-clock).
/// Anything else yields `None`: malformed dates are treated as absent, never
/// as errors.
pub fn parse_stamp(raw: &str) -> Option<Stamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Stamp::DateOnly(date));
    }

    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Stamp::DateTime(dt));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(Stamp::DateTime(dt.naive_utc()));
    }

    None
}

/// Convenience for optional raw fields: `None`, empty, and malformed all
/// parse to `None`
pub fn parse_opt_stamp(raw: Option<&str>) -> Option<Stamp> {
    raw.and_then(parse_stamp)
}
