use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Month names indexed by zero-based month (0 = January).
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Year choices for the selector: the center year plus/minus five,
/// always 11 entries.
pub fn year_options(center: i32) -> Vec<i32> {
    (center - 5..=center + 5).collect()
}

/// Parse a record date string. Accepts `YYYY-MM-DD`, a date with time,
/// or an RFC 3339 timestamp. Anything else is a `None`, not an error:
/// the shaper drops unresolvable records silently.
pub fn parse_record_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    None
}

/// Resolve an epoch-milliseconds timestamp to a calendar date (UTC).
pub fn date_from_millis(ms: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.date_naive())
}

/// Number of days in a month, zero-based month index.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let first = match NaiveDate::from_ymd_opt(year, month0 + 1, 1) {
        Some(d) => d,
        None => return 0,
    };
    let next_first = if month0 == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1)
    };
    match next_first {
        Some(n) => (n - first).num_days() as u32,
        None => 0,
    }
}

/// Column of a date in a Monday-first week grid (0 = Monday).
pub fn weekday_column(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}
