//! Configuration for itinerary gap detection.

use chrono::Duration;

use super::detector::DetectError;

/// Tuning parameters for gap detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetectorConfig {
    /// Idle time that must be exceeded before a gap is reported (minutes).
    /// Idle time exactly equal to this is not a gap.
    pub gap_threshold_mins: i64,

    /// Shortest gap that may suggest accommodation (minutes).
    /// The gap must also cross a calendar-day boundary.
    pub overnight_min_mins: i64,
}

impl DetectorConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(gap_threshold_mins: i64, overnight_min_mins: i64) -> Self {
        Self {
            gap_threshold_mins,
            overnight_min_mins,
        }
    }

    /// Returns the gap threshold as a Duration.
    ///
    /// Saturates when the minute count is outside what a Duration can hold.
    pub fn gap_threshold(&self) -> Duration {
        saturating_minutes(self.gap_threshold_mins)
    }

    /// Returns the overnight cutoff as a Duration.
    ///
    /// Saturates like [`gap_threshold`](Self::gap_threshold).
    pub fn overnight_min(&self) -> Duration {
        saturating_minutes(self.overnight_min_mins)
    }

    /// Reject settings that cannot describe a gap.
    pub fn validate(&self) -> Result<(), DetectError> {
        if self.gap_threshold_mins < 0 {
            return Err(DetectError::InvalidConfig(
                "gap threshold must not be negative",
            ));
        }
        if self.overnight_min_mins < 0 {
            return Err(DetectError::InvalidConfig(
                "overnight cutoff must not be negative",
            ));
        }
        if Duration::try_minutes(self.gap_threshold_mins).is_none() {
            return Err(DetectError::InvalidConfig("gap threshold out of range"));
        }
        if Duration::try_minutes(self.overnight_min_mins).is_none() {
            return Err(DetectError::InvalidConfig("overnight cutoff out of range"));
        }
        Ok(())
    }
}

fn saturating_minutes(mins: i64) -> Duration {
    Duration::try_minutes(mins).unwrap_or(if mins < 0 {
        Duration::MIN
    } else {
        Duration::MAX
    })
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            gap_threshold_mins: 120, // 2 hours
            overnight_min_mins: 360, // 6 hours
        }
    }
}
