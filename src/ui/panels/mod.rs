//! Dashboard panels
//!
//! Each panel borrows the slice of the snapshot it displays and renders
//! itself into a bordered block.

pub mod agent;
pub mod alerts;
pub mod map;
pub mod queues;
pub mod signals;

pub use agent::{reward_history_points, AgentPanel};
pub use alerts::{AlertsPanel, NO_ALERTS};
pub use map::{MapPanel, MAP_PLACEHOLDER};
pub use queues::{queue_fill_percent, QueuesPanel, QUEUE_CAPACITY};
pub use signals::SignalsPanel;
