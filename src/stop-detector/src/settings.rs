use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use config::{Config, ConfigError, File};
use serde::Deserialize;
use strum::{AsRefStr, EnumString};

pub const DEFAULT_MAX_RECORD_LENGTH: usize = 8192;

/// Detects vessels that stayed stopped for at least an hour.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// Json file with a stream of ais messages.
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Where to write the GeoJSON stop report.
    #[arg(long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Directory containing `<environment>.yml` configuration files.
    #[arg(long, value_name = "DIR", default_value = "config")]
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, EnumString, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Local,
    Development,
    Production,
    Test,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub environment: Environment,
    pub log_level: LogLevel,
    pub input: PathBuf,
    pub output: PathBuf,
    pub max_record_length: usize,
}

impl Settings {
    pub fn new(cli: &Cli) -> Result<Self, ConfigError> {
        let environment = match std::env::var("APP_ENVIRONMENT") {
            Ok(v) => Environment::from_str(&v).map_err(|e| {
                ConfigError::Message(format!("invalid APP_ENVIRONMENT '{v}': {e}"))
            })?,
            Err(_) => Environment::Local,
        };

        let file = cli.config_dir.join(environment.as_ref().to_lowercase());

        let mut builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("max_record_length", DEFAULT_MAX_RECORD_LENGTH as i64)?
            .add_source(File::with_name(&file.to_string_lossy()).required(false))
            .add_source(config::Environment::with_prefix("STOP_DETECTOR").separator("__"))
            .set_override("environment", environment.as_ref())?;

        if let Some(input) = &cli.input {
            builder = builder.set_override("input", input.to_string_lossy().into_owned())?;
        }
        if let Some(output) = &cli.output {
            builder = builder.set_override("output", output.to_string_lossy().into_owned())?;
        }

        builder.build()?.try_deserialize()
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
