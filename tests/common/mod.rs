//! Common test utilities and helpers

#![allow(dead_code)]

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use traffic_dash_core::DashboardSnapshot;

/// Backend payload captured from the detection service
pub const DETECT_FIXTURE: &str = include_str!("../fixtures/detect_snapshot.json");

/// Parsed fixture payload
pub fn fixture_snapshot() -> DashboardSnapshot {
    serde_json::from_str(DETECT_FIXTURE).expect("fixture must decode")
}

/// How the mock backend answers `/detect`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Healthy,
    ServerError,
    Garbage,
}

/// In-process stand-in for the detection backend
pub struct MockBackend {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
    garbage: Arc<AtomicBool>,
}

#[derive(Clone)]
struct BackendState {
    hits: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
    garbage: Arc<AtomicBool>,
}

async fn detect(State(state): State<BackendState>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if state.failing.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "detector offline".to_string());
    }
    if state.garbage.load(Ordering::SeqCst) {
        return (StatusCode::OK, "{\"signals\": [".to_string());
    }
    (StatusCode::OK, DETECT_FIXTURE.to_string())
}

impl MockBackend {
    /// Start the mock on an ephemeral loopback port
    pub async fn start() -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let failing = Arc::new(AtomicBool::new(false));
        let garbage = Arc::new(AtomicBool::new(false));

        let state = BackendState {
            hits: Arc::clone(&hits),
            failing: Arc::clone(&failing),
            garbage: Arc::clone(&garbage),
        };
        let router = Router::new()
            .route("/", get(|| async { "Backend is running!" }))
            .route("/detect", get(detect))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Mock backend crashed");
        });

        Self {
            addr,
            hits,
            failing,
            garbage,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/detect", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn set_mode(&self, mode: Mode) {
        self.failing.store(mode == Mode::ServerError, Ordering::SeqCst);
        self.garbage.store(mode == Mode::Garbage, Ordering::SeqCst);
    }
}
