use std::time::Duration;

use tokio::{
    sync::mpsc::WeakUnboundedSender,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::debug;

use super::Action;

/// Recurring position refresh
///
/// While running, sends [`Action::RefreshTick`] to the controller every
/// `interval`. The first tick comes one interval after [`start`](Self::start).
/// The timer holds only a weak sender, so it never keeps the controller alive.
pub struct RefreshTimer {
    interval: Duration,
    actions: WeakUnboundedSender<Action>,
    task: Option<JoinHandle<()>>,
}

impl RefreshTimer {
    /// Create a stopped timer delivering ticks to `actions`.
    pub fn new(interval: Duration, actions: WeakUnboundedSender<Action>) -> Self {
        Self {
            interval,
            actions,
            task: None,
        }
    }

    /// Start ticking. Does nothing if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        debug!(interval_ms = self.interval.as_millis() as u64, "Starting refresh timer");
        let interval = self.interval;
        let actions = self.actions.clone();

        self.task = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let Some(actions) = actions.upgrade() else {
                    break;
                };
                if actions.send(Action::RefreshTick).is_err() {
                    break;
                }
            }
        }));
    }

    /// Stop ticking. Does nothing if not running.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Stopping refresh timer");
            task.abort();
        }
    }

    /// Whether ticks are currently being delivered.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
