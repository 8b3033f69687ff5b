use async_trait::async_trait;
use std::time::Duration;

/// Artificial analysis latency used by interactive front ends
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(600);

/// Awaited by [`WizardController::submit_with`](crate::WizardController::submit_with)
/// before analysis runs.
///
/// Hooks only delay; they cannot change what gets analyzed.
#[async_trait]
pub trait ProcessingHook: Send + Sync {
    async fn before_analysis(&self);
}

/// Hook that returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

#[async_trait]
impl ProcessingHook for Immediate {
    async fn before_analysis(&self) {}
}

/// Hook that sleeps for a fixed delay
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    pub delay: Duration,
}

impl SimulatedLatency {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(DEFAULT_PROCESSING_DELAY)
    }
}

#[async_trait]
impl ProcessingHook for SimulatedLatency {
    async fn before_analysis(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
