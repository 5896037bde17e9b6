//! Data transfer objects for callers that speak JSON.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::WireError;
use crate::domain::{ItineraryGap, ItineraryItem, Suggestion, format_duration};
use crate::planner::ItineraryAnalysis;

/// Request to analyse one trip.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Every item currently stored for the trip, in any order
    #[serde(default)]
    pub items: Option<Vec<ItineraryItem>>,
}

impl AnalyzeRequest {
    /// Take the item list, failing if it was missing.
    pub fn into_items(self) -> Result<Vec<ItineraryItem>, WireError> {
        self.items.ok_or(WireError::MissingItems)
    }
}

/// One row of a rendered timeline: an item or the gap after it.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TimelineEntry {
    Item(ItemEntry),
    Gap(GapEntry),
}

/// An itinerary item prepared for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEntry {
    /// Item id
    pub id: String,

    /// `flight`, `transport` or `accommodation`
    pub item_type: &'static str,

    /// Local start, "YYYY-MM-DD HH:MM"
    pub start: String,

    /// Local end, "YYYY-MM-DD HH:MM"
    pub end: String,

    /// Human-readable length, e.g. "2h 15m"
    pub duration: String,

    /// Departure place label
    pub from: String,

    /// Arrival place label
    pub to: String,

    /// Nights, for accommodation only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nights: Option<i64>,
}

/// A gap prepared for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapEntry {
    /// Local start, "YYYY-MM-DD HH:MM"
    pub start: String,

    /// Local end, "YYYY-MM-DD HH:MM"
    pub end: String,

    /// Human-readable length
    pub duration: String,

    /// What could fill the gap
    pub suggestion: Suggestion,

    /// Previous item ends somewhere other than where the next starts
    pub location_mismatch: bool,
}

// Conversion implementations

impl ItemEntry {
    /// Create from a domain item.
    pub fn from_item(item: &ItineraryItem) -> Self {
        Self {
            id: item.id.to_string(),
            item_type: item.type_name(),
            start: format_local(&item.start_date_time),
            end: format_local(&item.end_date_time),
            duration: format_duration(item.duration_minutes()),
            from: item.departure_location().label().to_string(),
            to: item.arrival_location().label().to_string(),
            nights: item.nights(),
        }
    }
}

impl GapEntry {
    /// Create from a domain gap.
    pub fn from_gap(gap: &ItineraryGap) -> Self {
        Self {
            start: format_local(&gap.start_date_time),
            end: format_local(&gap.end_date_time),
            duration: format_duration(gap.duration_minutes()),
            suggestion: gap.suggestion,
            location_mismatch: gap.location_mismatch,
        }
    }
}

/// Interleave items and gaps into one display timeline.
///
/// Each gap is placed directly after the item it follows.
pub fn timeline(analysis: &ItineraryAnalysis) -> Vec<TimelineEntry> {
    let mut entries = Vec::with_capacity(analysis.sorted_items.len() + analysis.gaps.len());
    let mut gaps = analysis.gaps.iter().peekable();

    for (i, item) in analysis.sorted_items.iter().enumerate() {
        entries.push(TimelineEntry::Item(ItemEntry::from_item(item)));

        let next = analysis.sorted_items.get(i + 1);
        if let Some(gap) =
            gaps.next_if(|g| g.previous_item == *item && Some(&g.next_item) == next)
        {
            entries.push(TimelineEntry::Gap(GapEntry::from_gap(gap)));
        }
    }

    entries
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineEntry::Item(item) => {
                write!(
                    f,
                    "{:<13} {} -> {}  {:>8}  {} -> {}",
                    item.item_type, item.start, item.end, item.duration, item.from, item.to
                )?;
                match item.nights {
                    Some(1) => f.write_str(" (1 night)")?,
                    Some(nights) => write!(f, " ({nights} nights)")?,
                    None => {}
                }
                Ok(())
            }
            TimelineEntry::Gap(gap) => {
                write!(
                    f,
                    "  gap        {} -> {}  {:>8}  suggest {}",
                    gap.start, gap.end, gap.duration, gap.suggestion
                )?;
                if gap.location_mismatch {
                    f.write_str(" (location changes)")?;
                }
                Ok(())
            }
        }
    }
}

/// Format a timestamp in its own offset as "YYYY-MM-DD HH:MM".
fn format_local(time: &DateTime<FixedOffset>) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemId, ItemKind, Location, TripId};
    use crate::planner::Detector;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn make_items() -> Vec<ItineraryItem> {
        let trip = TripId::new("trip".to_string()).unwrap();
        vec![
            ItineraryItem::new(
                ItemId::new("train".to_string()).unwrap(),
                trip.clone(),
                ItemKind::Transport {
                    departure_location: Location::new("Paris Gare de Lyon"),
                    arrival_location: Location::new("Lyon Part-Dieu"),
                },
                at("2024-03-15T09:00:00+01:00"),
                at("2024-03-15T11:00:00+01:00"),
            ),
            ItineraryItem::new(
                ItemId::new("hotel".to_string()).unwrap(),
                trip,
                ItemKind::Accommodation {
                    location: Location::new("Hotel Lyon"),
                },
                at("2024-03-15T15:00:00+01:00"),
                at("2024-03-17T11:00:00+01:00"),
            ),
        ]
    }

    #[test]
    fn request_requires_items() {
        let req: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(matches!(req.into_items(), Err(WireError::MissingItems)));

        let req: AnalyzeRequest = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(matches!(req.into_items(), Err(WireError::MissingItems)));

        let req: AnalyzeRequest = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(req.into_items().unwrap().is_empty());
    }

    #[test]
    fn item_entry_fields() {
        let items = make_items();
        let entry = ItemEntry::from_item(&items[1]);

        assert_eq!(entry.id, "hotel");
        assert_eq!(entry.item_type, "accommodation");
        assert_eq!(entry.start, "2024-03-15 15:00");
        assert_eq!(entry.end, "2024-03-17 11:00");
        assert_eq!(entry.duration, "44h 0m");
        assert_eq!(entry.from, "Hotel Lyon");
        assert_eq!(entry.nights, Some(1));
    }

    #[test]
    fn timeline_interleaves_gaps() {
        let analysis = Detector::default().analyze(&make_items()).unwrap();
        let entries = timeline(&analysis);

        assert_eq!(entries.len(), 3);
        assert!(matches!(&entries[0], TimelineEntry::Item(e) if e.id == "train"));
        match &entries[1] {
            TimelineEntry::Gap(gap) => {
                assert_eq!(gap.duration, "4h 0m");
                assert_eq!(gap.suggestion, Suggestion::Transport);
                assert!(gap.location_mismatch);
            }
            other => panic!("expected gap, got {other:?}"),
        }
        assert!(matches!(&entries[2], TimelineEntry::Item(e) if e.id == "hotel"));
    }

    #[test]
    fn timeline_entry_serializes_with_kind() {
        let analysis = Detector::default().analyze(&make_items()).unwrap();
        let value = serde_json::to_value(timeline(&analysis)).unwrap();
        assert_eq!(value[0]["kind"], "item");
        assert_eq!(value[0]["itemType"], "transport");
        assert_eq!(value[1]["kind"], "gap");
        assert_eq!(value[1]["locationMismatch"], true);
        assert!(value[0].get("nights").is_none());
    }

    #[test]
    fn display_lines() {
        let analysis = Detector::default().analyze(&make_items()).unwrap();
        let lines: Vec<String> = timeline(&analysis).iter().map(|e| e.to_string()).collect();

        assert!(lines[0].starts_with("transport"));
        assert!(lines[0].contains("Paris Gare de Lyon -> Lyon Part-Dieu"));
        assert!(lines[1].contains("suggest transport (location changes)"));
        assert!(lines[2].ends_with("(1 night)"));
    }
}
