//! Application state for the terminal dashboard

use crate::poller::PollState;
use crate::ui::{self, DashboardView, PanelId, PanelManager};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use tokio::sync::watch;

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Refresh,
    Quit,
}

/// Application state
pub struct App {
    /// Latest poller state
    state: watch::Receiver<PollState>,
    /// Panel manager for visibility/layout
    panels: PanelManager,
    /// Backend endpoint shown in the header
    endpoint: String,
}

impl App {
    pub fn new(state: watch::Receiver<PollState>, endpoint: impl Into<String>) -> Self {
        Self {
            state,
            panels: PanelManager::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Char('r') => return KeyOutcome::Refresh,
            KeyCode::Char('p') => self.panels.cycle_preset(),
            KeyCode::Char('0') => {
                if self.panels.visible_count() == PanelId::all().len() {
                    self.panels.hide_all();
                } else {
                    self.panels.show_all();
                }
            }
            KeyCode::Char(c) => {
                if let Some(panel) = PanelId::from_shortcut(c) {
                    self.panels.toggle_panel(panel);
                }
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    /// Draw one frame from the latest state
    pub fn draw(&self, frame: &mut Frame) {
        // Clone so the poller is never blocked on the render
        let state = self.state.borrow().clone();
        ui::draw(
            frame,
            &DashboardView {
                state: &state,
                panels: &self.panels,
                endpoint: &self.endpoint,
            },
        );
    }

    pub fn panels(&self) -> &PanelManager {
        &self.panels
    }
}
