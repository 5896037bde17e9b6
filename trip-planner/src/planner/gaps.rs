//! Gap detection between consecutive itinerary items.
//!
//! Gaps are purely time-driven. Each consecutive pair of the sorted
//! timeline is checked once; a gap is reported when the idle time between
//! them is strictly longer than the configured threshold. Nothing is
//! reported before the first item or after the last, since open-ended time
//! has nothing to measure against.

use chrono::{DateTime, Duration, FixedOffset};
use tracing::trace;

use super::config::DetectorConfig;
use crate::domain::{ItineraryGap, ItineraryItem, Suggestion};

/// Find the gaps in a chronologically sorted list of items.
///
/// Overlapping or touching pairs never produce a gap, whatever the
/// threshold. They are not flagged either.
pub fn detect_gaps(sorted: &[ItineraryItem], config: &DetectorConfig) -> Vec<ItineraryGap> {
    let threshold = config.gap_threshold();
    let mut gaps = Vec::new();

    for pair in sorted.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        let idle = next
            .start_date_time
            .signed_duration_since(previous.end_date_time);

        if idle <= Duration::zero() {
            trace!(
                previous = %previous.id,
                next = %next.id,
                overlap_mins = -idle.num_minutes(),
                "items touch or overlap"
            );
            continue;
        }
        if idle <= threshold {
            continue;
        }

        let suggestion = suggest(previous.end_date_time, next.start_date_time, config);
        let gap = ItineraryGap::new(previous, next, suggestion);
        trace!(
            previous = %previous.id,
            next = %next.id,
            hours = gap.duration_hours,
            %suggestion,
            location_mismatch = gap.location_mismatch,
            "gap found"
        );
        gaps.push(gap);
    }

    gaps
}

/// Suggest what could fill the idle interval `start..end`.
///
/// Defaults to transport. A gap that runs past midnight and is at least the
/// overnight cutoff long suggests accommodation instead.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::Suggestion;
/// use trip_planner::planner::{DetectorConfig, suggest};
/// use chrono::DateTime;
///
/// let config = DetectorConfig::default();
/// let evening = DateTime::parse_from_rfc3339("2024-03-15T22:00:00Z").unwrap();
/// let morning = DateTime::parse_from_rfc3339("2024-03-16T09:00:00Z").unwrap();
/// assert_eq!(suggest(evening, morning, &config), Suggestion::Accommodation);
///
/// let noon = DateTime::parse_from_rfc3339("2024-03-15T12:00:00Z").unwrap();
/// assert_eq!(suggest(noon, evening, &config), Suggestion::Transport);
/// ```
pub fn suggest(
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    config: &DetectorConfig,
) -> Suggestion {
    let long_enough = end.signed_duration_since(start) >= config.overnight_min();
    if long_enough && crosses_midnight(start, end) {
        Suggestion::Accommodation
    } else {
        Suggestion::Transport
    }
}

/// Returns true if `end` falls on a later calendar date than `start`.
///
/// Each timestamp is read in its own UTC offset, i.e. the local date the
/// traveller sees at that end of the gap.
pub fn crosses_midnight(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> bool {
    end.date_naive() > start.date_naive()
}
