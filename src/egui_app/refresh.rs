//! # Token Refresh Timer
//!
//! Fires at a fixed period regardless of user activity. The timer only
//! signals that a refresh is due; the owner performs the call with the
//! tokens it holds at that moment. Dropping the timer aborts its task.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// Handle to a running refresh ticker.
#[derive(Debug)]
pub struct RefreshTimer {
    task: JoinHandle<()>,
    period: Duration,
}

impl RefreshTimer {
    /// Spawn the ticker on `runtime`. `on_tick` runs once per period, the
    /// first time one full period after start; returning `false` ends the
    /// timer.
    pub fn start<F>(runtime: &Handle, period: Duration, on_tick: F) -> Self
    where
        F: Fn() -> bool + Send + 'static,
    {
        let task = runtime.spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                tracing::debug!("token refresh due");
                if !on_tick() {
                    tracing::debug!("refresh listener gone, stopping timer");
                    break;
                }
            }
        });
        Self { task, period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
