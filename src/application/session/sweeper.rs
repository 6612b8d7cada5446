//! Background sweeping of expired sessions.
//!
//! Lazy eviction only catches sessions somebody asks about. The sweeper
//! bounds memory held by abandoned sessions by scanning the store on a fixed
//! interval. It runs as a single tokio task controlled through a
//! [`SweeperHandle`].

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::store::SessionStore;

/// Default interval between sweeps.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(30);

/// Default time to wait for the sweeper to stop before aborting it.
pub const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Shortest interval a sweeper will run at; shorter requests are raised to it.
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

/// How a sweeper shutdown completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// The task observed cancellation and exited within the grace period.
    Graceful,
    /// The grace period elapsed and the task was aborted.
    Forced,
}

/// Periodic expiry sweep over a [`SessionStore`].
pub struct Sweeper {
    store: Arc<SessionStore>,
    interval: Duration,
}

impl Sweeper {
    /// Create a sweeper for `store` running every `interval`.
    ///
    /// An interval below [`MIN_SWEEP_INTERVAL`], zero included, runs at
    /// [`MIN_SWEEP_INTERVAL`].
    #[must_use]
    pub fn new(store: Arc<SessionStore>, interval: Duration) -> Self {
        Self {
            store,
            interval: interval.max(MIN_SWEEP_INTERVAL),
        }
    }

    /// Spawn the sweep loop on the current tokio runtime.
    ///
    /// The first sweep runs one full interval after start.
    #[must_use = "dropping the handle leaves the sweeper running with no way to stop it"]
    pub fn start(self) -> SweeperHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let Self { store, interval } = self;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            info!(interval_ms = interval.as_millis() as u64, "Session sweeper started");

            loop {
                tokio::select! {
                    result = shutdown_rx.changed() => {
                        if result.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        let removed = store.sweep_expired();
                        if removed > 0 {
                            debug!(
                                removed,
                                remaining = store.active_session_count(),
                                "Swept expired sessions"
                            );
                        }
                    }
                }
            }

            info!("Session sweeper stopped");
        });

        SweeperHandle { shutdown_tx, task }
    }
}

/// Handle for controlling the sweeper lifecycle.
pub struct SweeperHandle {
    /// Channel for sending the shutdown signal.
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Return `true` once the sweep task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Request cancellation and wait up to `grace` for the task to exit.
    ///
    /// If the task has not finished when the grace period elapses it is
    /// aborted.
    pub async fn shutdown(self, grace: Duration) -> ShutdownOutcome {
        let Self {
            shutdown_tx,
            mut task,
        } = self;
        let _ = shutdown_tx.send(true);

        match tokio::time::timeout(grace, &mut task).await {
            Ok(_) => ShutdownOutcome::Graceful,
            Err(_) => {
                warn!(
                    grace_ms = grace.as_millis() as u64,
                    "Session sweeper did not stop in time, aborting"
                );
                task.abort();
                ShutdownOutcome::Forced
            }
        }
    }
}
