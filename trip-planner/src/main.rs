use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use trip_planner::planner::{Detector, DetectorConfig};
use trip_planner::wire::{self, WireError};

const USAGE: &str = "usage: trip-planner [--timeline] <request.json>";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut timeline = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--timeline" => timeline = true,
            _ if path.is_none() => path = Some(PathBuf::from(&arg)),
            _ => {
                eprintln!("{USAGE}");
                return ExitCode::FAILURE;
            }
        }
    }
    let Some(path) = path else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    // Thresholds can be tuned without a rebuild
    let config = DetectorConfig::new(
        env_minutes("TRIP_GAP_THRESHOLD_MINS", DetectorConfig::default().gap_threshold_mins),
        env_minutes("TRIP_OVERNIGHT_MIN_MINS", DetectorConfig::default().overnight_min_mins),
    );

    match run(&path, config, timeline) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path, config: DetectorConfig, timeline: bool) -> Result<(), WireError> {
    let detector = Detector::new(config)?;
    let items = wire::read_request(path)?;
    let analysis = detector.analyze(&items)?;

    info!(
        items = analysis.sorted_items.len(),
        gaps = analysis.gaps.len(),
        "analysed {}",
        path.display()
    );

    if timeline {
        for entry in wire::timeline(&analysis) {
            println!("{entry}");
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    }

    Ok(())
}

/// Read a minute count from the environment, falling back on bad input.
///
/// Range checks are left to `Detector::new`.
fn env_minutes(name: &str, default: i64) -> i64 {
    parse_minutes(name, std::env::var(name).ok().as_deref(), default)
}

fn parse_minutes(name: &str, raw: Option<&str>, default: i64) -> i64 {
    let Some(raw) = raw else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        warn!("{name}={raw:?} is not a whole number of minutes, using {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_uses_default() {
        assert_eq!(parse_minutes("TRIP_GAP_THRESHOLD_MINS", None, 120), 120);
    }

    #[test]
    fn whole_minutes_parsed() {
        assert_eq!(parse_minutes("TRIP_GAP_THRESHOLD_MINS", Some(" 45 "), 120), 45);
        assert_eq!(parse_minutes("TRIP_GAP_THRESHOLD_MINS", Some("-5"), 120), -5);
    }

    #[test]
    fn bad_input_falls_back() {
        assert_eq!(parse_minutes("TRIP_OVERNIGHT_MIN_MINS", Some("six"), 360), 360);
        assert_eq!(parse_minutes("TRIP_OVERNIGHT_MIN_MINS", Some("1.5"), 360), 360);
        assert_eq!(parse_minutes("TRIP_OVERNIGHT_MIN_MINS", Some(""), 360), 360);
    }

    #[test]
    fn parsed_values_still_range_checked() {
        let huge = parse_minutes("TRIP_GAP_THRESHOLD_MINS", Some("9223372036854775807"), 120);
        assert_eq!(huge, i64::MAX);

        // Settings are checked before the request file is touched
        let err = run(Path::new("missing.json"), DetectorConfig::new(huge, 360), false);
        assert!(matches!(err, Err(WireError::Detect(_))));
    }
}
