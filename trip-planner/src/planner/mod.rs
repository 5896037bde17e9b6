//! Itinerary merge and gap detection.
//!
//! This module answers: "in what order do my trip's bookings happen, and
//! where is there unplanned time between them?"
//!
//! The analysis is a pure function of the item set. Items are sorted by
//! start time, then each consecutive pair is checked for idle time longer
//! than the configured threshold. Each gap gets a suggestion for what might
//! fill it and a flag for when the two items don't meet at the same place.

mod config;
mod detector;
mod gaps;
mod merge;


pub use config::DetectorConfig;
pub use detector::{DetectError, Detector, ItineraryAnalysis, analyze};
pub use gaps::{crosses_midnight, detect_gaps, suggest};
pub use merge::sort_chronologically;
