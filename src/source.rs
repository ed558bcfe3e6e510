//! Snapshot sources - where the poller gets its data from
//!
//! [`HttpSnapshotSource`] talks to the backend endpoint; tests plug in
//! their own implementations of [`SnapshotSource`].

use crate::error::{DashError, Result};
use crate::snapshot::DashboardSnapshot;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Anything that can produce a complete dashboard snapshot
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch one snapshot; any failure leaves the caller's state untouched
    async fn fetch(&self) -> Result<DashboardSnapshot>;

    /// Human-readable origin, shown in the dashboard header
    fn describe(&self) -> String;
}

/// HTTP GET against the backend's snapshot endpoint
#[derive(Debug, Clone)]
pub struct HttpSnapshotSource {
    client: Client,
    endpoint: String,
}

impl HttpSnapshotSource {
    /// Create a source with a per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Create a source over an existing client
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch(&self) -> Result<DashboardSnapshot> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashError::Status(status));
        }

        let body = response.bytes().await?;
        let snapshot: DashboardSnapshot = serde_json::from_slice(&body)?;
        debug!(
            "Fetched snapshot: {} signals, {} queues, {} alerts",
            snapshot.signals.len(),
            snapshot.queue_lengths.len(),
            snapshot.alerts.len()
        );
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
