//! Client-side polling loop.
//!
//! A [`Poller`] owns two scheduled tasks: the data poll (fetch a snapshot
//! immediately, then every `poll_interval`) and the clock tick (refresh the
//! displayed time every `clock_interval`). Each task has its own
//! [`CancellationToken`]; [`Poller::deactivate`] cancels both at once.
//!
//! Both tasks publish into one `watch` channel, so a reader always sees a
//! single whole snapshot next to the latest clock string.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::models::Snapshot;
use crate::source::SnapshotSource;

/// Clock format shown in the dashboard header.
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// What the view renders from: last good snapshot plus the clock string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// `None` until the first successful fetch.
    pub snapshot: Option<Arc<Snapshot>>,
    pub clock: String,
}

/// Produces the clock string shown in the header.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

/// Shortest period a poller timer runs at; zero is raised to this.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Timer periods and clock source for the two poller tasks.
#[derive(Clone)]
pub struct PollerConfig {
    pub poll_interval: Duration,
    pub clock_interval: Duration,
    pub clock: Clock,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            clock_interval: Duration::from_secs(1),
            clock: Arc::new(local_clock),
        }
    }
}

impl From<&ClientConfig> for PollerConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            poll_interval: config.poll_interval(),
            clock_interval: config.clock_interval(),
            ..Self::default()
        }
    }
}

impl fmt::Debug for PollerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PollerConfig")
            .field("poll_interval", &self.poll_interval)
            .field("clock_interval", &self.clock_interval)
            .finish_non_exhaustive()
    }
}

/// Local wall-clock time formatted for display.
pub fn local_clock() -> String {
    chrono::Local::now().format(CLOCK_FORMAT).to_string()
}

fn clamp_period(name: &'static str, period: Duration) -> Duration {
    if period < MIN_PERIOD {
        tracing::warn!(timer = name, "zero period raised to {:?}", MIN_PERIOD);
        MIN_PERIOD
    } else {
        period
    }
}

/// Active polling session. Dropping it deactivates both timers.
pub struct Poller {
    state_rx: watch::Receiver<DashboardState>,
    poll_cancel: CancellationToken,
    clock_cancel: CancellationToken,
    poll_handle: JoinHandle<()>,
    clock_handle: JoinHandle<()>,
}

impl Poller {
    /// Starts both timers. The first fetch and clock update happen immediately.
    /// Periods below [`MIN_PERIOD`] are raised to it.
    pub fn activate(source: Arc<dyn SnapshotSource>, config: PollerConfig) -> Self {
        let poll_interval = clamp_period("poll", config.poll_interval);
        let clock_interval = clamp_period("clock", config.clock_interval);
        let initial = DashboardState {
            snapshot: None,
            clock: (config.clock)(),
        };
        let (state_tx, state_rx) = watch::channel(initial);
        let state_tx = Arc::new(state_tx);

        let poll_cancel = CancellationToken::new();
        let clock_cancel = CancellationToken::new();

        let poll_handle =
            spawn_poll_task(source, poll_interval, state_tx.clone(), poll_cancel.clone());
        let clock_handle =
            spawn_clock_task(config.clock, clock_interval, state_tx, clock_cancel.clone());

        tracing::info!(
            poll_interval_ms = poll_interval.as_millis() as u64,
            clock_interval_ms = clock_interval.as_millis() as u64,
            "Poller activated"
        );

        Self {
            state_rx,
            poll_cancel,
            clock_cancel,
            poll_handle,
            clock_handle,
        }
    }

    /// Current state (cheap: the snapshot is shared).
    pub fn state(&self) -> DashboardState {
        self.state_rx.borrow().clone()
    }

    /// Receiver that wakes on every snapshot or clock update.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state_rx.clone()
    }

    pub fn is_active(&self) -> bool {
        !self.poll_cancel.is_cancelled() && !self.clock_cancel.is_cancelled()
    }

    /// Cancels both timers. No fetch is started after this returns; a fetch
    /// already in flight completes but its result is dropped.
    pub fn deactivate(&self) {
        if self.is_active() {
            tracing::info!("Poller deactivated");
        }
        self.poll_cancel.cancel();
        self.clock_cancel.cancel();
    }

    /// True once both tasks have returned.
    pub fn tasks_finished(&self) -> bool {
        self.poll_handle.is_finished() && self.clock_handle.is_finished()
    }

    /// Deactivates, aborts a fetch still in flight and waits for both tasks.
    /// Returns without waiting out the request timeout.
    pub async fn shutdown(mut self) {
        self.deactivate();
        self.poll_handle.abort();
        for handle in [&mut self.poll_handle, &mut self.clock_handle] {
            match handle.await {
                Ok(()) => {}
                Err(e) if e.is_cancelled() => {}
                Err(e) => tracing::warn!(error = %e, "poller task ended abnormally"),
            }
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.deactivate();
    }
}

fn spawn_poll_task(
    source: Arc<dyn SnapshotSource>,
    period: Duration,
    state_tx: Arc<watch::Sender<DashboardState>>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut tick = interval(period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut polls: u64 = 0;

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tick.tick() => {}
            }

            polls += 1;
            let result = source.fetch().await;
            if cancel.is_cancelled() {
                tracing::debug!(poll = polls, "discarding fetch that finished after deactivation");
                break;
            }
            match result {
                Ok(snapshot) => {
                    tracing::debug!(poll = polls, sites = snapshot.len(), "snapshot updated");
                    let snapshot = Arc::new(snapshot);
                    state_tx.send_modify(|state| state.snapshot = Some(snapshot));
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        poll = polls,
                        "snapshot fetch failed; keeping last snapshot"
                    );
                }
            }
        }
        tracing::debug!(polls, "poll task stopped");
    })
}

fn spawn_clock_task(
    clock: Clock,
    period: Duration,
    state_tx: Arc<watch::Sender<DashboardState>>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut tick = interval(period);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tick.tick() => {
                    let now = clock();
                    state_tx.send_if_modified(|state| {
                        if state.clock == now {
                            return false;
                        }
                        state.clock = now;
                        true
                    });
                }
            }
        }
        tracing::debug!("clock task stopped");
    })
}
