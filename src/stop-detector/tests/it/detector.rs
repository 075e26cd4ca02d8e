use chrono::DateTime;
use stop_core::{Mmsi, Position, RunSummary, StopEvent};
use stop_detector::error::{Error, JsonRecordError};

use crate::helper::{AisInput, detect, reference_input};

#[tokio::test]
async fn test_reference_scenario_reports_single_stop() {
    let (result, sink) = detect(&reference_input()).await;

    assert_eq!(
        result.unwrap(),
        RunSummary {
            num_records: 8,
            num_ignored: 0,
            num_vessels: 2,
            num_stops: 1,
        }
    );
    assert!(sink.completed);
    assert_eq!(
        sink.stops,
        vec![StopEvent {
            mmsi: Mmsi::test_new(200),
            position: Position::new(10.0, 10.0),
            duration_secs: 4000,
            timestamp: DateTime::from_timestamp(4000, 0).unwrap(),
        }]
    );
}

#[tokio::test]
async fn test_vessel_still_stopped_at_end_of_input_is_reported_at_its_last_sample() {
    let input = AisInput::new()
        .class_a(1, 1000, 60.0, 5.0)
        .class_a(1, 3000, 60.001, 5.0)
        .class_a(1, 5000, 60.002, 5.0);

    let (result, sink) = detect(&input).await;

    assert_eq!(result.unwrap().num_stops, 1);
    assert_eq!(sink.stops.len(), 1);
    assert_eq!(sink.stops[0].duration_secs, 4000);
    assert_eq!(sink.stops[0].position, Position::new(60.002, 5.0));
    assert_eq!(sink.stops[0].timestamp.timestamp(), 5000);
}

#[tokio::test]
async fn test_irrelevant_and_static_messages_do_not_affect_stops() {
    let input = AisInput::new()
        .class_a(1, 0, 60.0, 5.0)
        .without_position(5, 1, 100)
        // base station report placed far away
        .position(4, 1, 200, 0.0, 0.0)
        .position(18, 1, 1800, 60.0, 5.0)
        .position(27, 1, 3800, 60.0, 5.0)
        .class_a(1, 3900, 61.0, 6.0);

    let (result, sink) = detect(&input).await;
    let summary = result.unwrap();

    assert_eq!(summary.num_records, 6);
    assert_eq!(summary.num_ignored, 2);
    assert_eq!(summary.num_vessels, 1);
    assert_eq!(sink.stops.len(), 1);
    assert_eq!(sink.stops[0].duration_secs, 3800);
    assert_eq!(sink.stops[0].timestamp.timestamp(), 3800);
}

#[tokio::test]
async fn test_position_report_without_coordinates_is_placed_at_origin() {
    let input = AisInput::new()
        .class_a(3, 0, 0.0, 0.0)
        .without_position(1, 3, 2000)
        .without_position(1, 3, 4000)
        .class_a(3, 4100, 10.0, 10.0);

    let (result, sink) = detect(&input).await;

    assert_eq!(result.unwrap().num_ignored, 0);
    assert_eq!(sink.stops.len(), 1);
    assert_eq!(sink.stops[0].position, Position::new(0.0, 0.0));
    assert_eq!(sink.stops[0].duration_secs, 4000);
}

#[tokio::test]
async fn test_records_on_one_line_and_pretty_printed_records_are_decoded() {
    let one_line = reference_input().into_string().replace('\n', " ");
    let pretty = r#"{
  "Message": {
    "MessageID": 1,
    "UserID": 200,
    "Latitude": 20.0,
    "Longitude": 20.0
  },
  "UTCTimeStamp": 4200
}"#;
    let input = AisInput::new().raw(&one_line).raw(pretty);

    let (result, sink) = detect(&input).await;

    assert_eq!(result.unwrap().num_records, 9);
    assert_eq!(sink.stops.len(), 1);
    assert_eq!(sink.stops[0].mmsi, Mmsi::test_new(200));
    assert_eq!(sink.stops[0].duration_secs, 4000);
}

#[tokio::test]
async fn test_blank_lines_are_skipped() {
    let input = AisInput::new()
        .raw("")
        .class_a(7, 0, 60.0, 5.0)
        .raw("   ")
        .class_a(7, 4000, 60.0, 5.0);

    let (result, sink) = detect(&input).await;

    assert_eq!(result.unwrap().num_records, 2);
    assert_eq!(sink.stops.len(), 1);
}

#[tokio::test]
async fn test_malformed_record_aborts_run_without_completing_report() {
    let input = AisInput::new()
        .class_a(1, 0, 60.0, 5.0)
        .class_a(1, 4000, 60.0, 5.0)
        .raw("{\"Message\":");

    let (result, sink) = detect(&input).await;

    assert!(matches!(
        result,
        Err(Error::Decode {
            record: 3,
            error: JsonRecordError::Decode { .. },
            ..
        })
    ));
    assert!(!sink.completed);
    assert!(sink.stops.is_empty());
}

#[tokio::test]
async fn test_out_of_range_timestamp_aborts_run() {
    let input = AisInput::new()
        .class_a(1, 0, 60.0, 5.0)
        .class_a(1, i64::MAX, 60.0, 5.0);

    let (result, sink) = detect(&input).await;

    assert!(matches!(
        result,
        Err(Error::InvalidTimestamp {
            record: 2,
            timestamp: i64::MAX,
            ..
        })
    ));
    assert!(!sink.completed);
}

#[tokio::test]
async fn test_empty_input_completes_with_no_stops() {
    let (result, sink) = detect(&AisInput::new()).await;

    assert_eq!(result.unwrap(), RunSummary::default());
    assert!(sink.completed);
    assert!(sink.stops.is_empty());
}
