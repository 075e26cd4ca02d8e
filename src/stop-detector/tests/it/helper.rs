use std::fmt::Write;

use stop_core::{Mmsi, RunSummary, StopEvent};
use stop_detector::{
    detector::Detector,
    error::Result,
    models::{AisMessage, AisRecord},
};

/// Builds ais input the same way it arrives on disk, one record per line unless raw text is
/// added.
#[derive(Debug, Default)]
pub struct AisInput {
    lines: String,
}

impl AisInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(self, message_id: i32, mmsi: i64, timestamp: i64, lat: f64, lon: f64) -> Self {
        self.record(AisRecord {
            message: AisMessage {
                message_id,
                user_id: Mmsi::test_new(mmsi),
                latitude: lat,
                longitude: lon,
            },
            utc_timestamp: timestamp,
        })
    }

    /// A class A position report.
    pub fn class_a(self, mmsi: i64, timestamp: i64, lat: f64, lon: f64) -> Self {
        self.position(1, mmsi, timestamp, lat, lon)
    }

    /// A message without coordinates.
    pub fn without_position(self, message_id: i32, mmsi: i64, timestamp: i64) -> Self {
        self.raw(&format!(
            r#"{{"Message":{{"MessageID":{message_id},"UserID":{mmsi},"Name":"SJARKEN"}},"UTCTimeStamp":{timestamp}}}"#
        ))
    }

    pub fn raw(mut self, line: &str) -> Self {
        writeln!(self.lines, "{line}").unwrap();
        self
    }

    fn record(self, record: AisRecord) -> Self {
        let line = serde_json::to_string(&record).unwrap();
        self.raw(&line)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.lines.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.lines
    }
}

/// Sink that remembers whether the run was completed.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub stops: Vec<StopEvent>,
    pub completed: bool,
}

#[async_trait::async_trait]
impl stop_core::StopReportSink for RecordingSink {
    async fn add_stop(&mut self, stop: StopEvent) -> stop_core::CoreResult<()> {
        self.stops.push(stop);
        Ok(())
    }

    async fn complete(&mut self) -> stop_core::CoreResult<()> {
        self.completed = true;
        Ok(())
    }
}

pub async fn detect(input: &AisInput) -> (Result<RunSummary>, RecordingSink) {
    let mut sink = RecordingSink::default();
    let result = Detector::default().run(input.as_bytes(), &mut sink).await;
    (result, sink)
}

/// The reference scenario: vessel 200 stays put for 4000 seconds before leaving, vessel 100
/// drifts for less than an hour.
pub fn reference_input() -> AisInput {
    AisInput::new()
        .class_a(100, 0, 0.0, 0.0)
        .class_a(200, 0, 10.0, 10.0)
        .class_a(100, 1800, 0.0, 0.0)
        .class_a(200, 2000, 10.0, 10.0)
        .class_a(100, 1900, 0.0, 0.0)
        .class_a(100, 2000, 1.0, 1.0)
        .class_a(200, 4000, 10.0, 10.0)
        .class_a(200, 4100, 20.0, 20.0)
}
