//! Queue panel - proportional bar per intersection

use crate::snapshot::QueueLength;
use crate::ui::colors::DashboardColors;
use crate::ui::widgets::ProgressBar;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const QUEUES_TITLE: &str = "Queue Lengths";

/// Queue length drawn as a full bar
pub const QUEUE_CAPACITY: u64 = 30;

/// Bar fill in percent; lengths above capacity clamp to 100
pub fn queue_fill_percent(length: u64) -> f64 {
    (length as f64 / QUEUE_CAPACITY as f64 * 100.0).min(100.0)
}

/// Queue lengths panel widget
pub struct QueuesPanel<'a> {
    queues: &'a [QueueLength],
}

impl<'a> QueuesPanel<'a> {
    pub fn new(queues: &'a [QueueLength]) -> Self {
        Self { queues }
    }

    /// Bars in payload order
    pub fn bars(&self) -> Vec<ProgressBar> {
        self.queues
            .iter()
            .map(|queue| {
                ProgressBar::new(queue_fill_percent(queue.length))
                    .color(DashboardColors::QUEUE_BAR)
            })
            .collect()
    }

    /// Render the queue panel
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(
                QUEUES_TITLE,
                Style::default()
                    .fg(DashboardColors::PANEL_TITLE)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DashboardColors::BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.queues.is_empty() {
            let empty = Paragraph::new("No queue data").style(
                Style::default()
                    .fg(DashboardColors::MUTED)
                    .add_modifier(Modifier::ITALIC),
            );
            frame.render_widget(empty, inner);
            return;
        }

        // Rows that don't fit are dropped from the bottom
        let visible = self.queues.len().min(inner.height as usize);
        let mut constraints = vec![Constraint::Length(1); visible];
        constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(constraints).split(inner);

        for ((queue, bar), row) in self.queues.iter().zip(self.bars()).zip(rows.iter()).take(visible) {
            let [label_area, bar_area, value_area] = Layout::horizontal([
                Constraint::Length(17),
                Constraint::Min(4),
                Constraint::Length(6),
            ])
            .areas(*row);

            frame.render_widget(
                Paragraph::new(format!("Intersection {}", queue.id)),
                label_area,
            );
            bar.render(frame, bar_area);
            frame.render_widget(
                Paragraph::new(format!("{:>5}", queue.length)).style(
                    Style::default()
                        .fg(DashboardColors::TEXT)
                        .add_modifier(Modifier::BOLD),
                ),
                value_area,
            );
        }
    }
}
