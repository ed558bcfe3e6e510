//! Agent panel - RL controller reward, episodes and reward history

use crate::snapshot::AgentPerformance;
use crate::ui::colors::DashboardColors;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

const AGENT_TITLE: &str = "RL Agent Performance";

/// Horizontal distance between consecutive history points
pub const HISTORY_X_STEP: f64 = 6.25;

/// Width of the history view box
pub const HISTORY_VIEW_WIDTH: f64 = 100.0;

/// Height of the history view box
pub const HISTORY_VIEW_HEIGHT: f64 = 20.0;

/// Reward value drawn on the bottom edge
pub const HISTORY_BASELINE: f64 = 80.0;

/// Reward units per vertical view unit
pub const HISTORY_Y_SCALE: f64 = 2.0;

/// Map the reward series into view-box coordinates (x right, y up).
///
/// Points are not clamped; the chart clips anything outside the view box.
pub fn reward_history_points(metrics: &[f64]) -> Vec<(f64, f64)> {
    metrics
        .iter()
        .enumerate()
        .map(|(i, value)| {
            (
                i as f64 * HISTORY_X_STEP,
                (value - HISTORY_BASELINE) / HISTORY_Y_SCALE,
            )
        })
        .collect()
}

/// Agent performance panel widget
pub struct AgentPanel<'a> {
    performance: &'a AgentPerformance,
}

impl<'a> AgentPanel<'a> {
    pub fn new(performance: &'a AgentPerformance) -> Self {
        Self { performance }
    }

    fn stat_line(label: &str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::raw(format!("{:<14}", label)),
            Span::styled(
                value,
                Style::default()
                    .fg(DashboardColors::REWARD)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }

    /// Render the agent panel
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(
                AGENT_TITLE,
                Style::default()
                    .fg(DashboardColors::PANEL_TITLE)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DashboardColors::BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [stats_area, label_area, chart_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let stats = Paragraph::new(vec![
            Self::stat_line("Total Reward:", format!("{:.2}", self.performance.reward)),
            Self::stat_line("Episodes:", self.performance.episodes.to_string()),
        ]);
        frame.render_widget(stats, stats_area);

        frame.render_widget(
            Paragraph::new("Reward History").style(Style::default().fg(DashboardColors::MUTED)),
            label_area,
        );

        if self.performance.metrics.is_empty() {
            frame.render_widget(
                Paragraph::new("No reward history yet").style(
                    Style::default()
                        .fg(DashboardColors::MUTED)
                        .add_modifier(Modifier::ITALIC),
                ),
                chart_area,
            );
            return;
        }

        let points = reward_history_points(&self.performance.metrics);
        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(DashboardColors::REWARD))
            .data(&points);

        let chart = Chart::new(vec![dataset])
            .x_axis(Axis::default().bounds([0.0, HISTORY_VIEW_WIDTH]))
            .y_axis(Axis::default().bounds([0.0, HISTORY_VIEW_HEIGHT]));

        frame.render_widget(chart, chart_area);
    }
}
