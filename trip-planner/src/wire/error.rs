//! Errors at the JSON boundary.

use crate::planner::DetectError;

/// Errors from decoding a request or running its analysis.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The request carried no item list (absent or `null`)
    #[error("request has no item list")]
    MissingItems,

    /// The request was not valid JSON for an item list
    #[error("invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The request file could not be read
    #[error("failed to read request: {0}")]
    Io(#[from] std::io::Error),

    /// The items broke the detector's input contract
    #[error(transparent)]
    Detect(#[from] DetectError),
}
