//! HTTP Source and Poller Integration Tests
//!
//! Runs the real reqwest-backed source and poller against an in-process
//! mock backend.

mod common;

use common::{fixture_snapshot, MockBackend, Mode};
use std::time::Duration;
use tokio::time::{sleep, timeout};
use traffic_dash_core::{
    DashError, DashboardSnapshot, HttpSnapshotSource, PollState, Poller, SignalStatus,
    SnapshotSource,
};

const FAST_POLL: Duration = Duration::from_millis(50);

fn source_for(backend: &MockBackend) -> HttpSnapshotSource {
    HttpSnapshotSource::new(backend.endpoint(), Duration::from_secs(2))
        .expect("Failed to build source")
}

/// Wait until the poller publishes a state matching `predicate`
async fn wait_for(
    rx: &mut tokio::sync::watch::Receiver<PollState>,
    predicate: impl Fn(&PollState) -> bool,
) -> PollState {
    timeout(Duration::from_secs(5), async {
        loop {
            if predicate(&rx.borrow()) {
                return rx.borrow().clone();
            }
            rx.changed().await.expect("Poller dropped its state");
        }
    })
    .await
    .expect("Timed out waiting for poller state")
}

#[tokio::test]
async fn test_fetch_decodes_backend_payload() {
    let backend = MockBackend::start().await;
    let snapshot = source_for(&backend).fetch().await.expect("fetch failed");

    assert_eq!(snapshot, fixture_snapshot());
    assert_eq!(snapshot.signals.len(), 3);
    assert_eq!(snapshot.signals[2].status, SignalStatus::Red);
    assert_eq!(snapshot.queue_lengths[1].length, 45);
    assert_eq!(snapshot.agent_performance.metrics.len(), 16);
    assert_eq!(backend.hits(), 1);
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let backend = MockBackend::start().await;
    backend.set_mode(Mode::ServerError);

    let result = source_for(&backend).fetch().await;
    match result {
        Err(DashError::Status(status)) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let backend = MockBackend::start().await;
    backend.set_mode(Mode::Garbage);

    let result = source_for(&backend).fetch().await;
    assert!(matches!(result, Err(DashError::Decode(_))));
}

#[tokio::test]
async fn test_poller_keeps_snapshot_through_outage() {
    let backend = MockBackend::start().await;
    let handle = Poller::new(source_for(&backend), FAST_POLL).spawn();
    let mut rx = handle.subscribe();

    let live = wait_for(&mut rx, |s| s.has_data()).await;
    assert_eq!(live.snapshot, fixture_snapshot());
    assert!(live.connected);

    backend.set_mode(Mode::ServerError);
    let stale = wait_for(&mut rx, |s| !s.connected).await;
    let hits_at_outage = backend.hits();

    sleep(FAST_POLL * 4).await;
    let still_stale = handle.current();
    assert!(backend.hits() > hits_at_outage, "poller should keep polling");
    assert_eq!(still_stale.snapshot, live.snapshot);
    assert_eq!(stale.snapshot, live.snapshot);

    // Garbage is treated exactly like an outage
    backend.set_mode(Mode::Garbage);
    sleep(FAST_POLL * 4).await;
    assert_eq!(handle.current().snapshot, live.snapshot);

    backend.set_mode(Mode::Healthy);
    let recovered = wait_for(&mut rx, |s| s.connected).await;
    assert!(recovered.applied_seq > live.applied_seq);

    handle.shutdown().await;
}

#[tokio::test]
async fn test_unreachable_backend_leaves_defaults() {
    // Bind and immediately release a port so nothing is listening on it
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let source = HttpSnapshotSource::new(
        format!("http://{}/detect", addr),
        Duration::from_millis(500),
    )
    .unwrap();

    let handle = Poller::new(source, FAST_POLL).spawn();
    let mut rx = handle.subscribe();
    wait_for(&mut rx, |s| s.issued >= 3).await;

    let state = handle.current();
    assert_eq!(state.snapshot, DashboardSnapshot::default());
    assert!(!state.connected);
    assert!(!state.has_data());

    handle.shutdown().await;
}

#[tokio::test]
async fn test_no_requests_after_shutdown() {
    let backend = MockBackend::start().await;
    let handle = Poller::new(source_for(&backend), FAST_POLL).spawn();
    let mut rx = handle.subscribe();
    wait_for(&mut rx, |s| s.issued >= 3).await;

    handle.shutdown().await;
    // Let any request already on the wire land
    sleep(Duration::from_millis(20)).await;
    let hits = backend.hits();

    sleep(FAST_POLL * 5).await;
    assert_eq!(backend.hits(), hits);
}
