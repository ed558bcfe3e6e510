//! Background poller - fetches snapshots on a fixed cadence
//!
//! The first fetch is issued as soon as the poller is spawned, then one per
//! interval. Every fetch runs as its own task so a slow backend never delays
//! the next tick. Responses carry the sequence number of the request that
//! produced them; a response older than the last applied one is discarded.
//!
//! State is published through a `tokio::sync::watch` channel so the UI can
//! read the latest snapshot without locking.

use crate::error::Result;
use crate::snapshot::DashboardSnapshot;
use crate::source::SnapshotSource;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Everything the dashboard knows about the backend at a point in time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollState {
    /// Last successfully fetched snapshot (empty until the first success)
    pub snapshot: DashboardSnapshot,
    /// Whether the most recent resolved request succeeded
    pub connected: bool,
    /// When the current snapshot was applied
    pub last_updated: Option<DateTime<Local>>,
    /// Sequence number of the request that produced `snapshot` (0 = none yet)
    pub applied_seq: u64,
    /// Number of fetches issued so far
    pub issued: u64,
}

impl PollState {
    /// True once at least one snapshot has been applied
    pub fn has_data(&self) -> bool {
        self.applied_seq > 0
    }
}

/// Poller configuration plus the source it reads from
pub struct Poller<S> {
    source: Arc<S>,
    interval: Duration,
}

impl<S: SnapshotSource + 'static> Poller<S> {
    pub fn new(source: S, interval: Duration) -> Self {
        Self::from_shared(Arc::new(source), interval)
    }

    /// Build a poller over a source that is shared with other owners
    pub fn from_shared(source: Arc<S>, interval: Duration) -> Self {
        Self { source, interval }
    }

    /// Start polling on the current tokio runtime
    pub fn spawn(self) -> PollerHandle {
        let (state_tx, state_rx) = watch::channel(PollState::default());
        let cancel = CancellationToken::new();
        let refresh = Arc::new(Notify::new());

        let task = tokio::spawn(run_loop(
            self.source,
            self.interval,
            Arc::new(state_tx),
            cancel.clone(),
            Arc::clone(&refresh),
        ));

        PollerHandle {
            state: state_rx,
            cancel,
            refresh,
            task: Some(task),
        }
    }
}

/// Owner-side handle of a running poller
///
/// Dropping the handle stops the poll loop; [`PollerHandle::shutdown`] also
/// waits for it to exit.
pub struct PollerHandle {
    state: watch::Receiver<PollState>,
    cancel: CancellationToken,
    refresh: Arc<Notify>,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Receiver that observes every state change
    pub fn subscribe(&self) -> watch::Receiver<PollState> {
        self.state.clone()
    }

    /// Clone of the latest state
    pub fn current(&self) -> PollState {
        self.state.borrow().clone()
    }

    /// Fetch now instead of waiting for the next tick; the cadence restarts from here
    pub fn refresh_now(&self) {
        self.refresh.notify_one();
    }

    /// Stop scheduling fetches and wait for the poll loop to finish
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!("Poll loop ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run_loop<S: SnapshotSource + 'static>(
    source: Arc<S>,
    period: Duration,
    state_tx: Arc<watch::Sender<PollState>>,
    cancel: CancellationToken,
    refresh: Arc<Notify>,
) {
    info!("Polling {} every {:?}", source.describe(), period);

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut next_seq: u64 = 1;

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = refresh.notified() => {
                debug!("Manual refresh requested");
                ticker.reset();
            }
            _ = ticker.tick() => {}
        }

        let seq = next_seq;
        next_seq += 1;
        state_tx.send_modify(|state| state.issued += 1);

        let source = Arc::clone(&source);
        let state_tx = Arc::clone(&state_tx);
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => debug!("Dropping in-flight fetch #{}", seq),
                result = source.fetch() => apply_result(&state_tx, seq, result),
            }
        });
    }

    debug!("Poll loop stopped after {} fetches", next_seq - 1);
}

/// Fold one fetch result into the published state
fn apply_result(
    state_tx: &watch::Sender<PollState>,
    seq: u64,
    result: Result<DashboardSnapshot>,
) {
    state_tx.send_if_modified(|state| {
        if seq <= state.applied_seq {
            debug!(
                "Discarding stale response #{} (already applied #{})",
                seq, state.applied_seq
            );
            return false;
        }

        match result {
            Ok(snapshot) => {
                state.snapshot = snapshot;
                state.applied_seq = seq;
                state.connected = true;
                state.last_updated = Some(Local::now());
                true
            }
            Err(e) => {
                warn!("Error fetching dashboard data (request #{}): {}", seq, e);
                let was_connected = state.connected;
                state.connected = false;
                was_connected
            }
        }
    });
}
