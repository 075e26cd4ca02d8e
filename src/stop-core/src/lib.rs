#![deny(rust_2018_idioms)]

//! Detects vessels that stay stationary for at least an hour in a stream of ais position
//! reports.
//!
//! The crate does no I/O: callers feed decoded [PositionReport]s into a [StreamProcessor] and
//! forward the returned [StopEvent]s to a [StopReportSink].

mod domain;
pub mod error;
mod ports;
mod processor;
mod statemachine;

pub use domain::*;
pub use error::{CoreResult, Error};
pub use ports::*;
pub use processor::*;
pub use statemachine::*;
