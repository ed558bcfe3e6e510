//! Dashboard rendering
//!
//! [`draw`] is a pure mapping from the current poll state and panel layout
//! to a ratatui frame: header, panel grid, footer.

pub mod colors;
pub mod panel_manager;
pub mod panels;
pub mod widgets;

pub use colors::{signal_color, DashboardColors};
pub use panel_manager::{LayoutPreset, LayoutRow, PanelId, PanelManager, PanelVisibility};

use crate::poller::PollState;
use panels::{AgentPanel, AlertsPanel, MapPanel, QueuesPanel, SignalsPanel};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use widgets::{StateIndicator, StateType};

pub const DASHBOARD_TITLE: &str = "Smart Traffic Dashboard";

/// Everything a frame is drawn from
pub struct DashboardView<'a> {
    pub state: &'a PollState,
    pub panels: &'a PanelManager,
    pub endpoint: &'a str,
}

/// Draw the whole dashboard
pub fn draw(frame: &mut Frame, view: &DashboardView) {
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header_area, view);
    render_body(frame, body_area, view);
    render_footer(frame, footer_area, view);
}

fn connection_indicator(state: &PollState) -> StateIndicator {
    if state.connected {
        StateIndicator::new(StateType::Live, "Live")
    } else if state.has_data() {
        StateIndicator::new(StateType::Stale, "Stale")
    } else {
        StateIndicator::new(StateType::Waiting, "Waiting for backend")
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let title = Line::from(vec![
        Span::styled(
            format!("{}  ", DASHBOARD_TITLE),
            Style::default()
                .fg(DashboardColors::TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        connection_indicator(view.state).render(),
        Span::styled(
            format!("  {}", view.endpoint),
            Style::default().fg(DashboardColors::MUTED),
        ),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DashboardColors::BORDER)),
    );
    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let rows = view.panels.layout_rows();
    if rows.is_empty() {
        let hint = Paragraph::new("All panels hidden - press '0' to show them")
            .alignment(Alignment::Center)
            .style(Style::default().fg(DashboardColors::MUTED));
        frame.render_widget(hint, area);
        return;
    }

    let row_areas = Layout::vertical(rows.iter().map(|row| row.height)).split(area);
    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cell_areas =
            Layout::horizontal(row.panels.iter().map(|(_, width)| *width)).split(*row_area);
        for ((panel, _), cell) in row.panels.iter().zip(cell_areas.iter()) {
            render_panel(frame, *panel, view.state, *cell);
        }
    }
}

fn render_panel(frame: &mut Frame, panel: PanelId, state: &PollState, area: Rect) {
    let snapshot = &state.snapshot;
    match panel {
        PanelId::Signals => SignalsPanel::new(&snapshot.signals).render(frame, area),
        PanelId::Queues => QueuesPanel::new(&snapshot.queue_lengths).render(frame, area),
        PanelId::Agent => AgentPanel::new(&snapshot.agent_performance).render(frame, area),
        PanelId::Alerts => AlertsPanel::new(&snapshot.alerts).render(frame, area),
        PanelId::Map => MapPanel.render(frame, area),
    }
}

fn render_footer(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let updated = view
        .state
        .last_updated
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    let layout = view.panels.current_preset_name().unwrap_or("Custom");

    let footer = Paragraph::new(format!(
        "Updated {} | Layout: {} | 'q' quit | 'r' refresh | '1-5' panels | '0' all | 'p' preset",
        updated, layout
    ))
    .style(Style::default().fg(DashboardColors::MUTED));
    frame.render_widget(footer, area);
}
