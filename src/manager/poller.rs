use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

/// Recurring refresh timer.
///
/// Each tick spawns its work as a separate task, so stopping the timer never
/// cancels a fetch that is already in flight. Whoever applies the result has
/// to check that the dialog is still visible.
#[derive(Debug, Default)]
pub struct RefreshPoller {
    timer: Option<JoinHandle<()>>,
}

impl RefreshPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts ticking every `period`, first tick one period from now.
    /// A running timer is replaced.
    pub fn start<F, Fut>(&mut self, period: Duration, mut tick: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.stop();
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                tokio::spawn(tick());
            }
        });
        debug!(period_ms = period.as_millis() as u64, "Refresh poller started");
        self.timer = Some(handle);
    }

    /// Cancels the timer; a no-op when it is not running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
            debug!("Refresh poller stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}

impl Drop for RefreshPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
