use std::path::PathBuf;

use snafu::ResultExt;
use stop_core::RunSummary;
use tokio::{fs::File, io::BufReader};
use tracing::{info, instrument};

use crate::{
    detector::Detector,
    error::{Result, error::OpenInputSnafu},
    report::GeoJsonReport,
    settings::Settings,
};

pub struct App {
    detector: Detector,
    input: PathBuf,
    output: PathBuf,
}

impl App {
    pub fn build(settings: &Settings) -> App {
        App {
            detector: Detector::new(settings.max_record_length),
            input: settings.input.clone(),
            output: settings.output.clone(),
        }
    }

    #[instrument(skip_all, fields(input = %self.input.display(), output = %self.output.display()))]
    pub async fn run(self) -> Result<RunSummary> {
        let file = File::open(&self.input)
            .await
            .with_context(|_| OpenInputSnafu {
                path: self.input.clone(),
            })?;
        let mut report = GeoJsonReport::create(&self.output).await?;

        let summary = self.detector.run(BufReader::new(file), &mut report).await?;

        info!(
            "final vessel count = {}, {} stopped positions found",
            summary.num_vessels, summary.num_stops
        );

        Ok(summary)
    }
}
