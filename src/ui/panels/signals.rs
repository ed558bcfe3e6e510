//! Signals panel - one row per intersection with a colored lamp

use crate::snapshot::Signal;
use crate::ui::colors::DashboardColors;
use crate::ui::widgets::StateIndicator;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

const SIGNALS_TITLE: &str = "Signal Status";

/// Signals panel widget
pub struct SignalsPanel<'a> {
    signals: &'a [Signal],
}

impl<'a> SignalsPanel<'a> {
    pub fn new(signals: &'a [Signal]) -> Self {
        Self { signals }
    }

    /// One list row per signal, in payload order
    pub fn items(&self) -> Vec<ListItem<'static>> {
        if self.signals.is_empty() {
            return vec![ListItem::new(Line::from(Span::styled(
                "No signal data",
                Style::default()
                    .fg(DashboardColors::MUTED)
                    .add_modifier(Modifier::ITALIC),
            )))];
        }

        self.signals.iter().map(Self::signal_row).collect()
    }

    fn signal_row(signal: &Signal) -> ListItem<'static> {
        let lamp = StateIndicator::signal(&signal.status).render_icon_only();

        ListItem::new(Line::from(vec![
            lamp,
            Span::styled(
                format!(" Intersection {:<4}", signal.id),
                Style::default()
                    .fg(DashboardColors::TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {} for {}s", signal.status, signal.duration)),
            Span::styled(
                format!("  Cars Passed: {}", signal.cars_passed),
                Style::default().fg(DashboardColors::MUTED),
            ),
        ]))
    }

    /// Render the signals panel
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let list = List::new(self.items()).block(
            Block::default()
                .title(Span::styled(
                    SIGNALS_TITLE,
                    Style::default()
                        .fg(DashboardColors::PANEL_TITLE)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );

        frame.render_widget(list, area);
    }
}
