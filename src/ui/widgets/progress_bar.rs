//! Progress bar widget used for queue occupancy

use crate::ui::colors::DashboardColors;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Gauge,
    Frame,
};

/// Horizontal bar filled to a percentage
pub struct ProgressBar {
    progress: f64,
    color: Color,
}

impl ProgressBar {
    /// Create new progress bar (progress: 0.0-100.0, clamped)
    pub fn new(progress: f64) -> Self {
        let progress = if progress.is_nan() { 0.0 } else { progress };
        Self {
            progress: progress.clamp(0.0, 100.0),
            color: DashboardColors::QUEUE_BAR,
        }
    }

    /// Set fill color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Render the progress bar
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(self.color)
                    .bg(DashboardColors::QUEUE_TRACK),
            )
            .use_unicode(true)
            .label("")
            .ratio(self.progress / 100.0);

        frame.render_widget(gauge, area);
    }

    /// Get current progress value
    pub fn progress(&self) -> f64 {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_creation() {
        let bar = ProgressBar::new(40.0);
        assert_eq!(bar.progress(), 40.0);
    }

    #[test]
    fn test_progress_clamping() {
        assert_eq!(ProgressBar::new(150.0).progress(), 100.0);
        assert_eq!(ProgressBar::new(-10.0).progress(), 0.0);
        assert_eq!(ProgressBar::new(f64::NAN).progress(), 0.0);
    }
}
