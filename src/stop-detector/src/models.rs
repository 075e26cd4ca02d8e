use chrono::DateTime;
use serde::{Deserialize, Serialize};
use stop_core::{Mmsi, Position, PositionReport};

use crate::error::{Result, error::InvalidTimestampSnafu};

/// A single record of the input stream.
///
/// ```json
/// {"Message":{"MessageID":18,"UserID":416004341,"Longitude":171.328,"Latitude":-7.578},"UTCTimeStamp":1588636800}
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AisRecord {
    #[serde(rename = "Message")]
    pub message: AisMessage,
    /// Seconds since the unix epoch.
    #[serde(rename = "UTCTimeStamp")]
    pub utc_timestamp: i64,
}

/// The decoded ais message, only the fields needed for stop detection are kept.
///
/// Messages without a position, such as static data, decode with both coordinates at zero.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AisMessage {
    #[serde(rename = "MessageID")]
    pub message_id: i32,
    #[serde(rename = "UserID")]
    pub user_id: Mmsi,
    #[serde(rename = "Latitude", default)]
    pub latitude: f64,
    #[serde(rename = "Longitude", default)]
    pub longitude: f64,
}

impl AisRecord {
    /// Converts the `record`th record of the input into a position report.
    pub fn into_position_report(self, record: usize) -> Result<PositionReport> {
        let Self {
            message,
            utc_timestamp,
        } = self;

        let msgtime = DateTime::from_timestamp(utc_timestamp, 0).ok_or_else(|| {
            InvalidTimestampSnafu {
                record,
                timestamp: utc_timestamp,
            }
            .build()
        })?;

        Ok(PositionReport {
            message_type_id: message.message_id,
            mmsi: message.user_id,
            msgtime,
            position: Position::new(message.latitude, message.longitude),
        })
    }
}
