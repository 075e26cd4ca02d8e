use std::process::ExitCode;

use clap::Parser;
use stop_detector::{
    settings::{Cli, Settings},
    startup::App,
};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::new(&cli) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(settings.log_level))
        .init();

    info!(
        "input file = {}, output file = {}",
        settings.input.display(),
        settings.output.display()
    );

    match App::build(&settings).run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("stop detection failed: {e:?}");
            ExitCode::FAILURE
        }
    }
}
