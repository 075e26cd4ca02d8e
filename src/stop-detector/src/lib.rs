#![deny(rust_2018_idioms)]

//! Reads a json stream of ais messages, detects vessels that stayed stopped for
//! at least an hour and writes them to a GeoJSON report.

pub mod codec;
pub mod detector;
pub mod error;
pub mod models;
pub mod report;
pub mod settings;
pub mod startup;
