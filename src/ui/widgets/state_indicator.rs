//! State indicator widget - Color-coded status badges

use crate::snapshot::SignalStatus;
use crate::ui::colors::{signal_color, DashboardColors};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// State types for visual indication
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateType {
    /// Traffic light lamp
    Signal(SignalStatus),
    /// Latest request succeeded
    Live,
    /// Latest request failed; showing the last good snapshot
    Stale,
    /// No snapshot received yet
    Waiting,
}

/// State indicator widget
pub struct StateIndicator {
    state_type: StateType,
    text: String,
}

impl StateIndicator {
    /// Create new state indicator
    pub fn new(state_type: StateType, text: impl Into<String>) -> Self {
        Self {
            state_type,
            text: text.into(),
        }
    }

    /// Lamp for a signal status, labelled with the status itself
    pub fn signal(status: &SignalStatus) -> Self {
        Self::new(StateType::Signal(status.clone()), status.to_string())
    }

    fn color(&self) -> Color {
        match &self.state_type {
            StateType::Signal(status) => signal_color(status),
            StateType::Live => DashboardColors::LIVE,
            StateType::Stale => DashboardColors::STALE,
            StateType::Waiting => DashboardColors::MUTED,
        }
    }

    fn icon(&self) -> &'static str {
        match &self.state_type {
            StateType::Signal(_) => "●",
            StateType::Live => "●",
            StateType::Stale => "⚠",
            StateType::Waiting => "◐",
        }
    }

    /// Render as a styled span
    pub fn render(&self) -> Span<'static> {
        Span::styled(
            format!("{} {}", self.icon(), self.text),
            Style::default().fg(self.color()).add_modifier(Modifier::BOLD),
        )
    }

    /// Render just the icon (no text)
    pub fn render_icon_only(&self) -> Span<'static> {
        Span::styled(
            self.icon().to_string(),
            Style::default().fg(self.color()).add_modifier(Modifier::BOLD),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::palette::tailwind;

    #[test]
    fn test_signal_indicator() {
        let indicator = StateIndicator::signal(&SignalStatus::Red);
        assert_eq!(indicator.render().content, "● Red");
        assert_eq!(indicator.render_icon_only().style.fg, Some(tailwind::RED.c500));
    }

    #[test]
    fn test_unknown_signal_renders_gray() {
        let status = SignalStatus::Other("Off".to_string());
        let span = StateIndicator::signal(&status).render();
        assert_eq!(span.style.fg, Some(tailwind::GRAY.c500));
        assert!(span.content.contains("Off"));
    }

    #[test]
    fn test_connection_colors() {
        assert_eq!(
            StateIndicator::new(StateType::Live, "").color(),
            DashboardColors::LIVE
        );
        assert_eq!(
            StateIndicator::new(StateType::Stale, "").color(),
            DashboardColors::STALE
        );
    }

    #[test]
    fn test_icon_display() {
        let span = StateIndicator::new(StateType::Live, "Live").render();
        assert_eq!(span.content, "● Live");

        let span = StateIndicator::new(StateType::Waiting, "Waiting for backend").render_icon_only();
        assert_eq!(span.content, "◐");
    }
}
