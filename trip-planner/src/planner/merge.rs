//! Chronological ordering of itinerary items.

use crate::domain::ItineraryItem;

/// Sort items by start time, earliest first.
///
/// The sort is stable: items that start at the same instant keep their
/// relative input order, so the timeline does not reshuffle between
/// recomputations. Timestamps are compared as instants, so items recorded
/// in different UTC offsets interleave correctly. `order_index` is ignored.
pub fn sort_chronologically(mut items: Vec<ItineraryItem>) -> Vec<ItineraryItem> {
    items.sort_by_key(|item| item.start_date_time);
    items
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{ItemId, ItemKind, Location, TripId};
    use chrono::{DateTime, Duration, FixedOffset};
    use proptest::prelude::*;

    fn base() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-03-15T00:00:00Z").unwrap()
    }

    /// Items with start offsets drawn from a small range so ties are common.
    fn make_items(starts: &[i64]) -> Vec<ItineraryItem> {
        starts
            .iter()
            .enumerate()
            .map(|(i, &start_mins)| {
                let start = base() + Duration::minutes(start_mins);
                ItineraryItem::new(
                    ItemId::new(format!("item-{i}")).unwrap(),
                    TripId::new("trip".to_string()).unwrap(),
                    ItemKind::Accommodation {
                        location: Location::new("Somewhere"),
                    },
                    start,
                    start + Duration::minutes(30),
                )
            })
            .collect()
    }

    proptest! {
        /// Output is non-decreasing by start time
        #[test]
        fn output_is_ordered(starts in prop::collection::vec(0i64..20, 0..30)) {
            let sorted = sort_chronologically(make_items(&starts));
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].start_date_time <= pair[1].start_date_time);
            }
        }

        /// Equal starts keep their input order
        #[test]
        fn ties_are_stable(starts in prop::collection::vec(0i64..5, 0..30)) {
            let sorted = sort_chronologically(make_items(&starts));
            for pair in sorted.windows(2) {
                if pair[0].start_date_time == pair[1].start_date_time {
                    let a: usize = pair[0].id.as_str()["item-".len()..].parse().unwrap();
                    let b: usize = pair[1].id.as_str()["item-".len()..].parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }

        /// Sorting is a permutation: nothing added or dropped
        #[test]
        fn preserves_items(starts in prop::collection::vec(0i64..1000, 0..30)) {
            let items = make_items(&starts);
            let sorted = sort_chronologically(items.clone());
            prop_assert_eq!(sorted.len(), items.len());
            for item in &items {
                prop_assert!(sorted.contains(item));
            }
        }
    }
}
