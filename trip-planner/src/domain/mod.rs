//! Domain types for trip itineraries.
//!
//! These are the value types the detector works on. Identifiers enforce
//! their invariants at construction; item timing is deliberately not
//! re-validated, since that happens when items are created.

mod duration;
mod gap;
mod ids;
mod item;
mod location;

pub use duration::{MINUTES_PER_NIGHT, calculate_duration, format_duration, nights_count};
pub use gap::{ItineraryGap, Suggestion};
pub use ids::{InvalidItemId, InvalidTripId, ItemId, TripId};
pub use item::{ItemKind, ItineraryItem};
pub use location::{Coordinates, Location};
