//! Traffic Dash - terminal dashboard for an adaptive traffic signal backend
//!
//! Polls a backend endpoint on a fixed cadence and renders the returned
//! snapshot (signal states, queue lengths, RL agent performance, alerts)
//! into terminal panels. All traffic logic lives in the backend; this crate
//! only fetches and displays.
//!
//! # Architecture
//!
//! - **Snapshot**: the payload model ([`DashboardSnapshot`])
//! - **Source**: where snapshots come from ([`SnapshotSource`], [`HttpSnapshotSource`])
//! - **Poller**: background fetch loop publishing [`PollState`]
//! - **UI**: pure rendering of a [`PollState`] into ratatui panels
//!
//! # Example
//!
//! ```ignore
//! use traffic_dash_core::{DashConfig, HttpSnapshotSource, Poller};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DashConfig::load(None)?;
//!     let source = HttpSnapshotSource::new(&config.endpoint, config.request_timeout())?;
//!     let poller = Poller::new(source, config.poll_interval()).spawn();
//!
//!     let mut updates = poller.subscribe();
//!     updates.changed().await?;
//!     println!("{} signals", updates.borrow().snapshot.signals.len());
//!
//!     poller.shutdown().await;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod poller;
pub mod snapshot;
pub mod source;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{App, KeyOutcome};
pub use config::{ConfigOverrides, DashConfig};
pub use error::{DashError, Result};
pub use poller::{PollState, Poller, PollerHandle};
pub use snapshot::{AgentPerformance, Alert, DashboardSnapshot, QueueLength, Signal, SignalStatus};
pub use source::{HttpSnapshotSource, SnapshotSource};
pub use terminal::TerminalManager;
