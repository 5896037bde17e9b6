//! Identifier types for trips and itinerary items.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when an item identifier is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid item id: {reason}")]
pub struct InvalidItemId {
    reason: &'static str,
}

/// Error returned when a trip identifier is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid trip id: {reason}")]
pub struct InvalidTripId {
    reason: &'static str,
}

/// Opaque identifier of a single itinerary item.
///
/// Item ids are assigned by the storage layer. The only validation is that
/// they must be non-empty.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::ItemId;
///
/// let id = ItemId::new("flight-1".to_string()).unwrap();
/// assert_eq!(id.as_str(), "flight-1");
///
/// assert!(ItemId::new(String::new()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Create an item id, rejecting empty strings.
    pub fn new(s: String) -> Result<Self, InvalidItemId> {
        if s.is_empty() {
            return Err(InvalidItemId {
                reason: "item id cannot be empty",
            });
        }
        Ok(ItemId(s))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = InvalidItemId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ItemId::new(s)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to the trip that owns an itinerary item.
///
/// The detector never looks trips up; it only checks that every item in one
/// analysis belongs to the same trip.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TripId(String);

impl TripId {
    /// Create a trip id, rejecting empty strings.
    pub fn new(s: String) -> Result<Self, InvalidTripId> {
        if s.is_empty() {
            return Err(InvalidTripId {
                reason: "trip id cannot be empty",
            });
        }
        Ok(TripId(s))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TripId {
    type Error = InvalidTripId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        TripId::new(s)
    }
}

impl From<TripId> for String {
    fn from(id: TripId) -> Self {
        id.0
    }
}

impl fmt::Debug for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TripId({})", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
