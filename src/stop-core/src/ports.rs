use async_trait::async_trait;

use crate::{CoreResult, StopEvent};

/// Destination of the stops found during a run.
#[async_trait]
pub trait StopReportSink: Send {
    async fn add_stop(&mut self, stop: StopEvent) -> CoreResult<()>;
    /// Called once after the last stop of a run has been added.
    async fn complete(&mut self) -> CoreResult<()>;
}

#[async_trait]
impl StopReportSink for Vec<StopEvent> {
    async fn add_stop(&mut self, stop: StopEvent) -> CoreResult<()> {
        self.push(stop);
        Ok(())
    }

    async fn complete(&mut self) -> CoreResult<()> {
        Ok(())
    }
}
