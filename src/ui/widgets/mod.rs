//! Reusable dashboard widgets
//!
//! - State indicators (signal lamps, connection badge)
//! - Progress bars (queue occupancy)

pub mod progress_bar;
pub mod state_indicator;

pub use progress_bar::ProgressBar;
pub use state_indicator::{StateIndicator, StateType};
