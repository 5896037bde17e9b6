//! Trip itinerary planner core.
//!
//! Takes the flights, transport legs and accommodation stays of one trip,
//! puts them in chronological order, and finds the unplanned time between
//! them, suggesting whether each gap needs transport or somewhere to stay.

pub mod cache;
pub mod domain;
pub mod planner;
pub mod wire;
