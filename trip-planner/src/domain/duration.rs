//! Duration arithmetic and formatting shared by the detector and display code.
//!
//! The presentation layer calls these directly to label single items, so
//! their rounding must stay identical to what the detector uses.

use chrono::{DateTime, FixedOffset};

/// Minutes in one counted night.
pub const MINUTES_PER_NIGHT: i64 = 60 * 24;

/// Whole minutes from `start` to `end`, rounded down.
///
/// Returns 0 when `end` is not after `start`; never negative.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::calculate_duration;
/// use chrono::DateTime;
///
/// let start = DateTime::parse_from_rfc3339("2024-03-15T10:00:00Z").unwrap();
/// let end = DateTime::parse_from_rfc3339("2024-03-15T11:30:59Z").unwrap();
/// assert_eq!(calculate_duration(start, end), 90);
/// assert_eq!(calculate_duration(end, start), 0);
/// ```
pub fn calculate_duration(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> i64 {
    let millis = end.signed_duration_since(start).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    millis / 60_000
}

/// Render minutes as `"{h}h {m}m"`, or `"{m}m"` under an hour.
///
/// Negative input renders as `"0m"`.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::format_duration;
///
/// assert_eq!(format_duration(0), "0m");
/// assert_eq!(format_duration(45), "45m");
/// assert_eq!(format_duration(60), "1h 0m");
/// assert_eq!(format_duration(135), "2h 15m");
/// ```
pub fn format_duration(minutes: i64) -> String {
    let minutes = minutes.max(0);
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        format!("{hours}h {rest}m")
    } else {
        format!("{rest}m")
    }
}

/// Number of full 24-hour blocks in a stay.
///
/// A partial day does not count, so 15:00 on day 1 to 11:00 on day 3
/// (44 hours) is one night, not two.
pub fn nights_count(total_minutes: i64) -> i64 {
    total_minutes.max(0) / MINUTES_PER_NIGHT
}
