use std::path::PathBuf;

use snafu::{IntoError, Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to open input file '{}'", path.display()))]
    OpenInput {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
        #[snafu(source)]
        error: std::io::Error,
    },
    #[snafu(display("Failed to create output file '{}'", path.display()))]
    CreateOutput {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
        #[snafu(source)]
        error: std::io::Error,
    },
    #[snafu(display("Failed to decode ais record #{record}"))]
    Decode {
        #[snafu(implicit)]
        location: Location,
        record: usize,
        #[snafu(source)]
        error: JsonRecordError,
    },
    #[snafu(display("Ais record #{record} has an out of range timestamp '{timestamp}'"))]
    InvalidTimestamp {
        #[snafu(implicit)]
        location: Location,
        record: usize,
        timestamp: i64,
    },
    #[snafu(display("Failed to encode stop report"))]
    EncodeReport {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: serde_json::Error,
    },
    #[snafu(display("Failed to write stop report to '{}'", path.display()))]
    WriteReport {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
        #[snafu(source)]
        error: std::io::Error,
    },
    #[snafu(display("Stop report sink failed"))]
    Report {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: stop_core::Error,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module(json_record), visibility(pub))]
pub enum JsonRecordError {
    #[snafu(display("Failed to read input"))]
    Io {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: std::io::Error,
    },
    #[snafu(display("Invalid json at byte offset {offset}"))]
    Decode {
        #[snafu(implicit)]
        location: Location,
        offset: usize,
        #[snafu(source)]
        error: serde_json::Error,
    },
    #[snafu(display(
        "Json record at byte offset {offset} exceeds the maximum length of {max_length} bytes"
    ))]
    RecordTooLong {
        #[snafu(implicit)]
        location: Location,
        offset: usize,
        max_length: usize,
    },
}

impl From<std::io::Error> for JsonRecordError {
    #[track_caller]
    fn from(value: std::io::Error) -> Self {
        json_record::IoSnafu.into_error(value)
    }
}
