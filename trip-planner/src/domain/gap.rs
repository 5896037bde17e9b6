//! Idle intervals between consecutive itinerary items.

use std::fmt;

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};

use super::ItineraryItem;
use super::duration::calculate_duration;

/// What kind of booking could fill a gap.
///
/// A hint for the UI, not a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suggestion {
    /// Getting from one place to the next.
    Transport,
    /// Somewhere to sleep.
    Accommodation,
}

impl Suggestion {
    /// Returns the wire name of the suggestion.
    pub fn as_str(&self) -> &'static str {
        match self {
            Suggestion::Transport => "transport",
            Suggestion::Accommodation => "accommodation",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Idle time between the end of one item and the start of the next.
///
/// Gaps are derived on every analysis and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryGap {
    /// End of the previous item.
    pub start_date_time: DateTime<FixedOffset>,

    /// Start of the next item.
    pub end_date_time: DateTime<FixedOffset>,

    /// Length of the gap in fractional hours.
    pub duration_hours: f64,

    pub previous_item: ItineraryItem,

    pub next_item: ItineraryItem,

    pub suggestion: Suggestion,

    /// The previous item does not end where the next one starts.
    /// Informative only: it never decides whether a gap is reported.
    pub location_mismatch: bool,
}

impl ItineraryGap {
    /// Build the gap between two consecutive items.
    pub fn new(previous: &ItineraryItem, next: &ItineraryItem, suggestion: Suggestion) -> Self {
        let start_date_time = previous.end_date_time;
        let end_date_time = next.start_date_time;
        let idle = end_date_time.signed_duration_since(start_date_time);
        let location_mismatch = !previous
            .arrival_location()
            .same_place(next.departure_location());

        Self {
            start_date_time,
            end_date_time,
            duration_hours: idle.num_milliseconds() as f64 / 3_600_000.0,
            previous_item: previous.clone(),
            next_item: next.clone(),
            suggestion,
            location_mismatch,
        }
    }

    /// Signed length of the gap.
    pub fn duration(&self) -> Duration {
        self.end_date_time
            .signed_duration_since(self.start_date_time)
    }

    /// Whole minutes of the gap, for display.
    pub fn duration_minutes(&self) -> i64 {
        calculate_duration(self.start_date_time, self.end_date_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemId, ItemKind, Location, TripId};

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn transport(id: &str, from: &str, to: &str, start: &str, end: &str) -> ItineraryItem {
        ItineraryItem::new(
            ItemId::new(id.to_string()).unwrap(),
            TripId::new("trip".to_string()).unwrap(),
            ItemKind::Transport {
                departure_location: Location::new(from),
                arrival_location: Location::new(to),
            },
            at(start),
            at(end),
        )
    }

    #[test]
    fn gap_bounds_and_hours() {
        let a = transport("a", "X", "Y", "2024-03-15T08:00:00Z", "2024-03-15T10:00:00Z");
        let b = transport("b", "Y", "Z", "2024-03-15T14:30:00Z", "2024-03-15T16:00:00Z");
        let gap = ItineraryGap::new(&a, &b, Suggestion::Transport);

        assert_eq!(gap.start_date_time, a.end_date_time);
        assert_eq!(gap.end_date_time, b.start_date_time);
        assert_eq!(gap.duration_hours, 4.5);
        assert_eq!(gap.duration_minutes(), 270);
        assert_eq!(gap.duration(), Duration::minutes(270));
        assert_eq!(gap.previous_item.id.as_str(), "a");
        assert_eq!(gap.next_item.id.as_str(), "b");
        assert!(!gap.location_mismatch);
    }

    #[test]
    fn location_mismatch_flagged() {
        let a = transport("a", "X", "Y", "2024-03-15T08:00:00Z", "2024-03-15T10:00:00Z");
        let b = transport("b", "W", "Z", "2024-03-15T14:00:00Z", "2024-03-15T16:00:00Z");
        let gap = ItineraryGap::new(&a, &b, Suggestion::Transport);
        assert!(gap.location_mismatch);
    }

    #[test]
    fn suggestion_wire_names() {
        assert_eq!(Suggestion::Transport.to_string(), "transport");
        assert_eq!(
            serde_json::to_string(&Suggestion::Accommodation).unwrap(),
            "\"accommodation\""
        );
    }

    #[test]
    fn serializes_camel_case() {
        let a = transport("a", "X", "Y", "2024-03-15T08:00:00Z", "2024-03-15T10:00:00Z");
        let b = transport("b", "Y", "Z", "2024-03-15T14:00:00Z", "2024-03-15T16:00:00Z");
        let value = serde_json::to_value(ItineraryGap::new(&a, &b, Suggestion::Transport)).unwrap();
        assert_eq!(value["durationHours"], 4.0);
        assert_eq!(value["suggestion"], "transport");
        assert_eq!(value["locationMismatch"], false);
        assert_eq!(value["previousItem"]["id"], "a");
        assert_eq!(value["nextItem"]["id"], "b");
    }
}
