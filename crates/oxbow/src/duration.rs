//! Human-readable duration formatting.
//!
//! Decomposes a millisecond count into fixed-size units (months through
//! seconds) and renders up to a requested number of non-zero parts as an
//! English phrase. The month is a fixed 30-day unit; there is no calendar
//! awareness and no leap handling.

/// Seconds per fixed 30-day month.
pub const SECS_PER_MONTH: u64 = 2_592_000;
/// Seconds per day.
pub const SECS_PER_DAY: u64 = 86_400;
/// Seconds per hour.
pub const SECS_PER_HOUR: u64 = 3_600;
/// Seconds per minute.
pub const SECS_PER_MINUTE: u64 = 60;

/// Number of parts rendered when the caller does not ask for a valid count.
pub const DEFAULT_PARTS: usize = 2;

/// Ordered decomposition of a duration into fixed conversion units.
///
/// # Example
///
/// ```
/// use oxbow::duration::DurationParts;
///
/// let parts = DurationParts::from_millis(90_061_000);
/// assert_eq!(parts.days, 1);
/// assert_eq!(parts.hours, 1);
/// assert_eq!(parts.minutes, 1);
/// assert_eq!(parts.seconds, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    /// Decompose a millisecond count, largest unit first. Sub-second
    /// remainder is truncated.
    pub fn from_millis(ms: u64) -> Self {
        let mut secs = ms / 1000;

        let months = secs / SECS_PER_MONTH;
        secs -= months * SECS_PER_MONTH;

        let days = secs / SECS_PER_DAY;
        secs -= days * SECS_PER_DAY;

        let hours = secs / SECS_PER_HOUR;
        secs -= hours * SECS_PER_HOUR;

        let minutes = secs / SECS_PER_MINUTE;
        secs -= minutes * SECS_PER_MINUTE;

        Self {
            months,
            days,
            hours,
            minutes,
            seconds: secs,
        }
    }

    /// Unit values paired with their singular names, largest first.
    fn named(&self) -> [(u64, &'static str); 5] {
        [
            (self.months, "month"),
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
        ]
    }
}

/// Convert milliseconds to a human-readable string.
///
/// Renders up to `parts` non-zero units, largest first, with singular or
/// plural suffixes. One part renders bare, two join with `"and"`, and three
/// or more form a serial-comma list ending in `", and"`. A `parts` value
/// below 1 is coerced to [`DEFAULT_PARTS`]; a duration under one second
/// renders as `"0 seconds"`.
///
/// # Example
///
/// ```
/// use oxbow::duration::duration_to_string;
///
/// assert_eq!(duration_to_string(1000, 2), "1 second");
/// assert_eq!(duration_to_string(75_000, 2), "1 minute and 15 seconds");
/// assert_eq!(duration_to_string(3_600_000, 2), "1 hour");
/// ```
pub fn duration_to_string(ms: u64, parts: usize) -> String {
    let parts = if parts < 1 { DEFAULT_PARTS } else { parts };

    if ms < 1000 {
        return "0 seconds".to_string();
    }

    let decomposed = DurationParts::from_millis(ms);
    let mut rendered: Vec<String> = Vec::with_capacity(parts);

    for (value, unit) in decomposed.named() {
        if value == 0 {
            continue;
        }
        if rendered.len() == parts {
            break;
        }
        let suffix = if value == 1 { "" } else { "s" };
        rendered.push(format!("{} {}{}", value, unit, suffix));
    }

    match rendered.as_slice() {
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
        // Unreachable: ms >= 1000 guarantees at least one non-zero unit.
        [] => "0 seconds".to_string(),
    }
}

/// [`duration_to_string`] with the default part count.
pub fn duration_to_string_default(ms: u64) -> String {
    duration_to_string(ms, DEFAULT_PARTS)
}
