//! JSON boundary for the detector.
//!
//! Callers that hold a trip's items as JSON (a backend endpoint, the
//! command-line driver) go through here. The request shape is
//! `{ "items": [...] }` and the response is the analysis itself,
//! `{ "sortedItems": [...], "gaps": [...] }`.

mod dto;
mod error;

use std::path::Path;

pub use dto::*;
pub use error::WireError;

use crate::domain::ItineraryItem;
use crate::planner::{Detector, DetectorConfig};

/// Decode a request body into its item list.
///
/// A `null` body or a missing/`null` `items` field is rejected with
/// [`WireError::MissingItems`].
pub fn parse_request(json: &str) -> Result<Vec<ItineraryItem>, WireError> {
    let request: Option<AnalyzeRequest> = serde_json::from_str(json)?;
    request.ok_or(WireError::MissingItems)?.into_items()
}

/// Read and decode a request file.
pub fn read_request(path: &Path) -> Result<Vec<ItineraryItem>, WireError> {
    let json = std::fs::read_to_string(path)?;
    parse_request(&json)
}

/// Analyse a JSON request and return the JSON response.
pub fn analyze_request_json(json: &str, config: &DetectorConfig) -> Result<String, WireError> {
    let items = parse_request(json)?;
    let analysis = Detector::new(config.clone())?.analyze(&items)?;
    Ok(serde_json::to_string(&analysis)?)
}
