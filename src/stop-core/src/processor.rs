use std::collections::{HashMap, hash_map::Entry};

use tracing::{debug, info};

use crate::{Mmsi, PositionReport, StopEvent, VesselState};

/// Counters describing a single pass over an input stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub num_records: u64,
    /// Records with a message type that does not carry a position.
    pub num_ignored: u64,
    pub num_vessels: u64,
    pub num_stops: u64,
}

/// Dispatches position reports to the state of their vessel.
///
/// Reports must be fed in input order, the processor trusts that reports of a single vessel
/// arrive in chronological order.
#[derive(Debug, Default)]
pub struct StreamProcessor {
    vessels: HashMap<Mmsi, VesselState>,
    summary: RunSummary,
}

impl StreamProcessor {
    pub fn new() -> StreamProcessor {
        StreamProcessor::default()
    }

    pub fn process(&mut self, report: &PositionReport) -> Option<StopEvent> {
        self.summary.num_records += 1;

        if !report.is_relevant() {
            self.summary.num_ignored += 1;
            return None;
        }

        match self.vessels.entry(report.mmsi) {
            Entry::Vacant(e) => {
                e.insert(VesselState::new(report));
                self.summary.num_vessels += 1;
                debug!(
                    "new vessel found {}, current vessel count = {}",
                    report.mmsi, self.summary.num_vessels
                );
                None
            }
            Entry::Occupied(mut e) => {
                let vessel = e.get_mut();
                let stop = vessel.update(report);
                if let Some(stop) = &stop {
                    log_stop(&mut self.summary, vessel, stop);
                }
                stop
            }
        }
    }

    /// Ends the run, returning the stops of all vessels that were still stopped when the input
    /// ended, ordered by mmsi.
    pub fn finalize(self) -> (Vec<StopEvent>, RunSummary) {
        let Self {
            vessels,
            mut summary,
        } = self;

        let mut stops = Vec::new();
        for vessel in vessels.values() {
            if let Some(stop) = vessel.flush() {
                log_stop(&mut summary, vessel, &stop);
                stops.push(stop);
            }
        }
        stops.sort_by_key(|s| s.mmsi);

        (stops, summary)
    }

    pub fn vessel(&self, mmsi: Mmsi) -> Option<&VesselState> {
        self.vessels.get(&mmsi)
    }
}

fn log_stop(summary: &mut RunSummary, vessel: &VesselState, stop: &StopEvent) {
    summary.num_stops += 1;
    info!(
        mmsi = %stop.mmsi,
        timestamp = %stop.timestamp,
        num_samples = vessel.num_samples(),
        last_elapsed_secs = vessel.elapsed_secs(),
        duration_secs = stop.duration_secs,
        "found stop #{}",
        summary.num_stops
    );
}
