use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Position;

/// Message types carrying a vessel position: class A position reports (1, 2, 3), class B
/// position reports (18, 19) and long range broadcasts (27).
pub const RELEVANT_MESSAGE_TYPES: [i32; 6] = [1, 2, 3, 18, 19, 27];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct Mmsi(i64);

/// A single decoded position sample of a vessel.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionReport {
    pub message_type_id: i32,
    pub mmsi: Mmsi,
    pub msgtime: DateTime<Utc>,
    pub position: Position,
}

pub fn is_relevant_message_type(message_type_id: i32) -> bool {
    RELEVANT_MESSAGE_TYPES.contains(&message_type_id)
}

impl PositionReport {
    pub fn is_relevant(&self) -> bool {
        is_relevant_message_type(self.message_type_id)
    }
}

impl Mmsi {
    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for Mmsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(any(test, feature = "test"))]
mod test {
    use super::*;

    impl Mmsi {
        pub fn test_new(mmsi: i64) -> Self {
            Self(mmsi)
        }
    }

    impl PositionReport {
        /// A class A position report at `timestamp` seconds since the unix epoch.
        pub fn test_new(mmsi: i64, timestamp: i64, latitude: f64, longitude: f64) -> Self {
            PositionReport {
                message_type_id: 1,
                mmsi: Mmsi(mmsi),
                msgtime: DateTime::from_timestamp(timestamp, 0).unwrap(),
                position: Position::new(latitude, longitude),
            }
        }

        pub fn with_message_type(mut self, message_type_id: i32) -> Self {
            self.message_type_id = message_type_id;
            self
        }
    }
}
