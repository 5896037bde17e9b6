//! Itinerary analysis: chronological merge plus gap detection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::DetectorConfig;
use super::gaps::detect_gaps;
use super::merge::sort_chronologically;
use crate::domain::{ItineraryGap, ItineraryItem, TripId};

/// Errors from the detector's input boundary.
///
/// The content of individual items never produces an error; only inputs
/// that break the contract of a single analysis do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectError {
    /// Items from different trips were passed to one analysis
    #[error("items belong to more than one trip: expected {expected}, found {found}")]
    MixedTrips { expected: TripId, found: TripId },

    /// Detector settings are out of range
    #[error("invalid detector configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Result of analysing one trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryAnalysis {
    /// All input items, earliest start first.
    pub sorted_items: Vec<ItineraryItem>,

    /// Gaps between consecutive items, in timeline order.
    pub gaps: Vec<ItineraryGap>,
}

impl ItineraryAnalysis {
    /// Returns true if any gap was found.
    pub fn has_gaps(&self) -> bool {
        !self.gaps.is_empty()
    }

    /// Total idle minutes across all gaps.
    pub fn total_gap_minutes(&self) -> i64 {
        self.gaps.iter().map(|g| g.duration_minutes()).sum()
    }
}

/// Stateless itinerary analyser.
///
/// Holds only its configuration, so one detector can be shared freely
/// between threads. Every call recomputes from the full item set.
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    /// Create a detector, rejecting invalid configuration.
    pub fn new(config: DetectorConfig) -> Result<Self, DetectError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the detector configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Order a trip's items and find the gaps between them.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the items belong to more than one trip.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_planner::planner::Detector;
    ///
    /// let analysis = Detector::default().analyze(&[]).unwrap();
    /// assert!(analysis.sorted_items.is_empty());
    /// assert!(analysis.gaps.is_empty());
    /// ```
    pub fn analyze(&self, items: &[ItineraryItem]) -> Result<ItineraryAnalysis, DetectError> {
        ensure_single_trip(items)?;

        let sorted_items = sort_chronologically(items.to_vec());
        let gaps = detect_gaps(&sorted_items, &self.config);

        debug!(
            trip = items.first().map(|i| i.trip_id.as_str()).unwrap_or("-"),
            items = sorted_items.len(),
            gaps = gaps.len(),
            "itinerary analysed"
        );

        Ok(ItineraryAnalysis { sorted_items, gaps })
    }
}

/// One-off analysis with the given configuration.
pub fn analyze(
    items: &[ItineraryItem],
    config: &DetectorConfig,
) -> Result<ItineraryAnalysis, DetectError> {
    Detector::new(config.clone())?.analyze(items)
}

/// Check every item belongs to the trip of the first one.
fn ensure_single_trip(items: &[ItineraryItem]) -> Result<(), DetectError> {
    let Some(first) = items.first() else {
        return Ok(());
    };
    match items.iter().find(|i| i.trip_id != first.trip_id) {
        Some(other) => Err(DetectError::MixedTrips {
            expected: first.trip_id.clone(),
            found: other.trip_id.clone(),
        }),
        None => Ok(()),
    }
}
