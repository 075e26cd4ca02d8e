use chrono::{DateTime, Utc};

use crate::{Mmsi, Position};

/// Vessels moving slower than this are considered stopped.
pub const STOP_SPEED_THRESHOLD_KNOTS: f64 = 1.0;
/// Accumulated stop time required before a stop is reported.
pub const MIN_STOP_DURATION_SECS: i64 = 3600;

const METERS_PER_SECOND_TO_KNOTS: f64 = 1.9438;

/// A period of at least [MIN_STOP_DURATION_SECS] where a vessel stayed below
/// [STOP_SPEED_THRESHOLD_KNOTS].
#[derive(Debug, Clone, PartialEq)]
pub struct StopEvent {
    pub mmsi: Mmsi,
    /// Position of the last sample of the stop run.
    pub position: Position,
    pub duration_secs: i64,
    /// Timestamp of the last sample of the stop run.
    pub timestamp: DateTime<Utc>,
}

/// Speed in knots of covering `distance_meters` in `elapsed_secs`, zero if no time elapsed.
pub fn speed_knots(distance_meters: f64, elapsed_secs: i64) -> f64 {
    if elapsed_secs == 0 {
        return 0.0;
    }

    (distance_meters / elapsed_secs as f64).abs() * METERS_PER_SECOND_TO_KNOTS
}
