use futures::StreamExt;
use snafu::ResultExt;
use stop_core::{RunSummary, StopReportSink, StreamProcessor};
use tokio::io::AsyncRead;
use tokio_util::codec::FramedRead;
use tracing::instrument;

use crate::{
    codec::JsonRecordCodec,
    error::{
        Result,
        error::{DecodeSnafu, ReportSnafu},
    },
    models::AisRecord,
    settings::DEFAULT_MAX_RECORD_LENGTH,
};

/// Runs stop detection over a json stream of ais records.
#[derive(Debug, Clone)]
pub struct Detector {
    max_record_length: usize,
}

impl Default for Detector {
    fn default() -> Self {
        Detector::new(DEFAULT_MAX_RECORD_LENGTH)
    }
}

impl Detector {
    pub fn new(max_record_length: usize) -> Detector {
        Detector { max_record_length }
    }

    /// Consumes `source` until it ends, forwarding every found stop to `sink`.
    ///
    /// Any record that cannot be read or decoded aborts the run, in which case `sink` is never
    /// completed.
    #[instrument(skip_all)]
    pub async fn run<S>(&self, source: impl AsyncRead + Unpin, sink: &mut S) -> Result<RunSummary>
    where
        S: StopReportSink + ?Sized,
    {
        let codec = JsonRecordCodec::<AisRecord>::new(self.max_record_length);
        let mut framed_read = FramedRead::new(source, codec);

        let mut processor = StreamProcessor::new();
        let mut record = 0;

        while let Some(ais) = framed_read.next().await {
            record += 1;
            let report = ais
                .context(DecodeSnafu { record })?
                .into_position_report(record)?;

            if let Some(stop) = processor.process(&report) {
                sink.add_stop(stop).await.context(ReportSnafu)?;
            }
        }

        let (stops, summary) = processor.finalize();
        for stop in stops {
            sink.add_stop(stop).await.context(ReportSnafu)?;
        }
        sink.complete().await.context(ReportSnafu)?;

        Ok(summary)
    }
}
