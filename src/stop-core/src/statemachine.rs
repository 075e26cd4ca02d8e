use chrono::{DateTime, Utc};

use crate::{
    MIN_STOP_DURATION_SECS, Mmsi, Position, PositionReport, STOP_SPEED_THRESHOLD_KNOTS,
    StopEvent, speed_knots,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub position: Position,
    pub timestamp: DateTime<Utc>,
}

/// The two most recent samples of a vessel, in processing order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleWindow {
    pub previous: Sample,
    pub current: Sample,
}

#[derive(Debug, Clone, Copy, Default)]
struct StopRun {
    elapsed_secs: i64,
}

/// Tracks the motion of a single vessel and detects when it has been stopped for long enough
/// to be reported.
#[derive(Debug, Clone)]
pub struct VesselState {
    mmsi: Mmsi,
    window: SampleWindow,
    distance_meters: f64,
    elapsed_secs: i64,
    speed_knots: f64,
    stop_run: Option<StopRun>,
    num_samples: u64,
}

impl From<&PositionReport> for Sample {
    fn from(value: &PositionReport) -> Self {
        Sample {
            position: value.position,
            timestamp: value.msgtime,
        }
    }
}

impl SampleWindow {
    fn new(sample: Sample) -> SampleWindow {
        SampleWindow {
            previous: sample,
            current: sample,
        }
    }

    fn roll(&mut self) {
        self.previous = self.current;
    }
}

impl StopRun {
    /// The stop is placed at `last`, the final slow sample of the run.
    fn stop_event(&self, mmsi: Mmsi, last: Sample) -> Option<StopEvent> {
        (self.elapsed_secs >= MIN_STOP_DURATION_SECS).then(|| StopEvent {
            mmsi,
            position: last.position,
            duration_secs: self.elapsed_secs,
            timestamp: last.timestamp,
        })
    }
}

impl VesselState {
    /// Seeds both window slots with the vessel's first report.
    pub fn new(report: &PositionReport) -> VesselState {
        VesselState {
            mmsi: report.mmsi,
            window: SampleWindow::new(Sample::from(report)),
            distance_meters: 0.0,
            elapsed_secs: 0,
            speed_knots: 0.0,
            stop_run: None,
            num_samples: 1,
        }
    }

    /// Advances the vessel with its next report, returns a stop if the report ends a stop run
    /// that lasted long enough.
    pub fn update(&mut self, report: &PositionReport) -> Option<StopEvent> {
        self.window.current = Sample::from(report);

        let SampleWindow { previous, current } = self.window;

        self.distance_meters = previous.position.distance_to(&current.position) * 1000.0;
        self.elapsed_secs = (current.timestamp - previous.timestamp)
            .num_seconds()
            .abs();
        self.speed_knots = speed_knots(self.distance_meters, self.elapsed_secs);

        let stop = if self.speed_knots < STOP_SPEED_THRESHOLD_KNOTS {
            self.stop_run.get_or_insert_default().elapsed_secs += self.elapsed_secs;
            None
        } else {
            self.stop_run
                .take()
                .and_then(|run| run.stop_event(self.mmsi, previous))
        };

        self.window.roll();
        self.num_samples += 1;

        stop
    }

    /// Reports an ongoing stop run at the vessel's last sample, only meant to be called once
    /// the input has ended.
    pub fn flush(&self) -> Option<StopEvent> {
        self.stop_run
            .and_then(|run| run.stop_event(self.mmsi, self.window.previous))
    }

    pub fn mmsi(&self) -> Mmsi {
        self.mmsi
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    pub fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    pub fn elapsed_secs(&self) -> i64 {
        self.elapsed_secs
    }

    pub fn speed_knots(&self) -> f64 {
        self.speed_knots
    }

    pub fn is_stopped(&self) -> bool {
        self.stop_run.is_some()
    }

    pub fn stopped_secs(&self) -> i64 {
        self.stop_run.map(|r| r.elapsed_secs).unwrap_or(0)
    }

    pub fn num_samples(&self) -> u64 {
        self.num_samples
    }
}
