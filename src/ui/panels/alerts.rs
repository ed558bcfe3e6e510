//! Alerts panel - backend alerts or an empty-state message

use crate::snapshot::Alert;
use crate::ui::colors::DashboardColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

const ALERTS_TITLE: &str = "System Alerts";

/// Shown when the backend reports no alerts
pub const NO_ALERTS: &str = "No active alerts.";

/// Alerts panel widget
pub struct AlertsPanel<'a> {
    alerts: &'a [Alert],
}

impl<'a> AlertsPanel<'a> {
    pub fn new(alerts: &'a [Alert]) -> Self {
        Self { alerts }
    }

    pub fn items(&self) -> Vec<ListItem<'static>> {
        if self.alerts.is_empty() {
            return vec![ListItem::new(Line::from(Span::styled(
                NO_ALERTS,
                Style::default()
                    .fg(DashboardColors::MUTED)
                    .add_modifier(Modifier::ITALIC),
            )))];
        }

        self.alerts
            .iter()
            .map(|alert| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("⚠ {}", alert.message),
                        Style::default()
                            .fg(DashboardColors::ALERT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", alert.timestamp),
                        Style::default().fg(DashboardColors::MUTED),
                    ),
                ]))
            })
            .collect()
    }

    /// Render the alerts panel
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let list = List::new(self.items()).block(
            Block::default()
                .title(Span::styled(
                    ALERTS_TITLE,
                    Style::default()
                        .fg(DashboardColors::ALERT_TITLE)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DashboardColors::BORDER)),
        );

        frame.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_item_per_alert() {
        let alerts = vec![
            Alert {
                message: "High congestion alert at intersection 1!".to_string(),
                timestamp: "08:15:02".to_string(),
            },
            Alert {
                message: "High congestion alert at intersection 3!".to_string(),
                timestamp: "08:15:04".to_string(),
            },
        ];
        assert_eq!(AlertsPanel::new(&alerts).items().len(), 2);
    }

    #[test]
    fn test_empty_state_message() {
        let items = AlertsPanel::new(&[]).items();
        assert_eq!(items.len(), 1);
    }
}
