//! Calendar month names.
//!
//! Maps 1-based month indices, timestamps, and [`chrono`] datetimes to
//! English month names. Out-of-range indices are an explicit error rather
//! than a silent placeholder.

use chrono::{DateTime, Datelike, Utc};

use crate::{Error, Result};

/// English month names, January first.
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

/// Returns the name of the month for a 1-based index.
///
/// # Errors
///
/// Returns [`Error::MonthOutOfRange`] for indices outside `1..=12`.
///
/// # Example
///
/// ```
/// use oxbow::months::month_name;
///
/// assert_eq!(month_name(2).unwrap(), "February");
/// assert!(month_name(0).is_err());
/// assert!(month_name(13).is_err());
/// ```
pub fn month_name(month: u32) -> Result<&'static str> {
    match month {
        1..=12 => Ok(MONTH_NAMES[(month - 1) as usize]),
        other => Err(Error::MonthOutOfRange(other)),
    }
}

/// Returns the month name for a UTC datetime.
///
/// Infallible: chrono datetimes always carry a month in `1..=12`.
pub fn month_name_from_datetime(datetime: &DateTime<Utc>) -> &'static str {
    MONTH_NAMES[(datetime.month() - 1) as usize]
}

/// Returns the month name for a Unix timestamp in milliseconds, interpreted
/// in UTC.
///
/// # Errors
///
/// Returns [`Error::InvalidTimestamp`] when the timestamp is outside the
/// range chrono can represent.
///
/// # Example
///
/// ```
/// use oxbow::months::month_name_from_timestamp;
///
/// // 1970-01-01T00:00:00Z
/// assert_eq!(month_name_from_timestamp(0).unwrap(), "January");
/// ```
pub fn month_name_from_timestamp(timestamp_ms: i64) -> Result<&'static str> {
    let datetime = DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .ok_or(Error::InvalidTimestamp(timestamp_ms))?;
    Ok(month_name_from_datetime(&datetime))
}
