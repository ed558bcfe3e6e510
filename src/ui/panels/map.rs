//! Map panel - placeholder, the backend exposes no geometry

use crate::ui::colors::DashboardColors;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MAP_TITLE: &str = "Live Traffic Map";

pub const MAP_PLACEHOLDER: &str = "Live map not available";

pub struct MapPanel;

impl MapPanel {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(
                MAP_TITLE,
                Style::default()
                    .fg(DashboardColors::PANEL_TITLE)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DashboardColors::BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(MAP_PLACEHOLDER)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(DashboardColors::MUTED)
                        .add_modifier(Modifier::BOLD),
                ),
            middle,
        );
    }
}
