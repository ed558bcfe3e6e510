//! Consistent color palette for the dashboard
//!
//! Shades come from ratatui's tailwind palette so the terminal rendition
//! matches the web dashboard the backend was built for.

use crate::snapshot::SignalStatus;
use ratatui::style::{palette::tailwind, Color};

/// Color palette for dashboard elements
pub struct DashboardColors;

impl DashboardColors {
    // === Signal lamps ===

    pub const SIGNAL_GREEN: Color = tailwind::EMERALD.c500;
    pub const SIGNAL_YELLOW: Color = tailwind::AMBER.c500;
    pub const SIGNAL_RED: Color = tailwind::RED.c500;
    /// Any status the backend reports that we don't recognize
    pub const SIGNAL_UNKNOWN: Color = tailwind::GRAY.c500;

    // === Data ===

    pub const QUEUE_BAR: Color = tailwind::SKY.c500;
    pub const QUEUE_TRACK: Color = tailwind::GRAY.c600;
    pub const REWARD: Color = tailwind::GREEN.c400;

    // === UI Elements ===

    pub const PANEL_TITLE: Color = tailwind::EMERALD.c300;
    pub const ALERT_TITLE: Color = tailwind::RED.c400;
    pub const ALERT: Color = tailwind::RED.c300;
    pub const BORDER: Color = tailwind::GRAY.c600;
    pub const TEXT: Color = Color::White;
    pub const MUTED: Color = tailwind::GRAY.c500;

    // === Connection ===

    pub const LIVE: Color = tailwind::EMERALD.c400;
    pub const STALE: Color = tailwind::RED.c500;
}

/// Lamp color for a signal status
pub fn signal_color(status: &SignalStatus) -> Color {
    match status {
        SignalStatus::Green => DashboardColors::SIGNAL_GREEN,
        SignalStatus::Yellow => DashboardColors::SIGNAL_YELLOW,
        SignalStatus::Red => DashboardColors::SIGNAL_RED,
        SignalStatus::Other(_) => DashboardColors::SIGNAL_UNKNOWN,
    }
}
