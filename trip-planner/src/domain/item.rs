//! Itinerary item types.
//!
//! An `ItineraryItem` is one scheduled segment of a trip: a flight, a piece
//! of ground transport, or an accommodation stay. The variants share their
//! timing and ownership fields and differ only in how they carry locations.

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};

use super::duration::{calculate_duration, nights_count};
use super::{ItemId, Location, TripId};

/// Variant-specific data of an itinerary item, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ItemKind {
    /// A flight between two airports.
    #[serde(rename_all = "camelCase")]
    Flight {
        departure_location: Location,
        arrival_location: Location,
    },
    /// Train, bus, ferry, car or any other ground leg.
    #[serde(rename_all = "camelCase")]
    Transport {
        departure_location: Location,
        arrival_location: Location,
    },
    /// A stay at a single place.
    Accommodation { location: Location },
}

impl ItemKind {
    /// Returns the `type` discriminator as used on the wire.
    pub fn type_name(&self) -> &'static str {
        match self {
            ItemKind::Flight { .. } => "flight",
            ItemKind::Transport { .. } => "transport",
            ItemKind::Accommodation { .. } => "accommodation",
        }
    }

    /// Where this segment starts.
    ///
    /// For accommodation this is the place you later check out from.
    pub fn departure_location(&self) -> &Location {
        match self {
            ItemKind::Flight {
                departure_location, ..
            }
            | ItemKind::Transport {
                departure_location, ..
            } => departure_location,
            ItemKind::Accommodation { location } => location,
        }
    }

    /// Where this segment ends.
    ///
    /// For accommodation this is the place you check in to.
    pub fn arrival_location(&self) -> &Location {
        match self {
            ItemKind::Flight {
                arrival_location, ..
            }
            | ItemKind::Transport {
                arrival_location, ..
            } => arrival_location,
            ItemKind::Accommodation { location } => location,
        }
    }
}

/// One scheduled segment of a trip.
///
/// `end_date_time > start_date_time` is validated when items are created,
/// not here. Items with an empty or inverted range are carried through
/// unchanged and behave as zero-length wherever a duration is needed.
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub id: ItemId,

    pub trip_id: TripId,

    #[serde(flatten)]
    pub kind: ItemKind,

    pub start_date_time: DateTime<FixedOffset>,

    pub end_date_time: DateTime<FixedOffset>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Manual ordering hint from the timeline UI. Chronological ordering
    /// does not read it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<u32>,
}

impl ItineraryItem {
    /// Create an item with no notes and no manual ordering.
    pub fn new(
        id: ItemId,
        trip_id: TripId,
        kind: ItemKind,
        start_date_time: DateTime<FixedOffset>,
        end_date_time: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id,
            trip_id,
            kind,
            start_date_time,
            end_date_time,
            notes: None,
            order_index: None,
        }
    }

    /// Attach free-text notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attach a manual ordering hint.
    pub fn with_order_index(mut self, order_index: u32) -> Self {
        self.order_index = Some(order_index);
        self
    }

    /// Returns the `type` discriminator.
    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Returns true if this is an accommodation stay.
    pub fn is_accommodation(&self) -> bool {
        matches!(self.kind, ItemKind::Accommodation { .. })
    }

    /// Where this item starts.
    pub fn departure_location(&self) -> &Location {
        self.kind.departure_location()
    }

    /// Where this item ends.
    pub fn arrival_location(&self) -> &Location {
        self.kind.arrival_location()
    }

    /// Signed duration of the item; negative for inverted ranges.
    pub fn duration(&self) -> Duration {
        self.end_date_time.signed_duration_since(self.start_date_time)
    }

    /// Whole minutes the item lasts, clamped at zero.
    pub fn duration_minutes(&self) -> i64 {
        calculate_duration(self.start_date_time, self.end_date_time)
    }

    /// Number of nights for an accommodation stay.
    ///
    /// Returns `None` for flights and transport.
    pub fn nights(&self) -> Option<i64> {
        self.is_accommodation()
            .then(|| nights_count(self.duration_minutes()))
    }
}
