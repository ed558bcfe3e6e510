//! Panel management - visibility toggles, presets and grid layout
//!
//! Panels sit in a fixed three-row grid:
//! `[Signals | Agent]`, `[Queues | Map]`, `[Alerts]`.
//! Hidden panels hand their width to the rest of their row; a row with no
//! visible panels collapses.

use ratatui::layout::Constraint;

/// Panel identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Signals,
    Agent,
    Queues,
    Map,
    Alerts,
}

/// Grid rows: (height weight, panels left to right)
const GRID: [(u16, &[PanelId]); 3] = [
    (3, &[PanelId::Signals, PanelId::Agent]),
    (3, &[PanelId::Queues, PanelId::Map]),
    (2, &[PanelId::Alerts]),
];

impl PanelId {
    /// All panel IDs in shortcut order
    pub fn all() -> Vec<PanelId> {
        vec![
            PanelId::Signals,
            PanelId::Queues,
            PanelId::Agent,
            PanelId::Alerts,
            PanelId::Map,
        ]
    }

    /// Keyboard shortcut number (1-5)
    pub fn shortcut_key(&self) -> char {
        match self {
            PanelId::Signals => '1',
            PanelId::Queues => '2',
            PanelId::Agent => '3',
            PanelId::Alerts => '4',
            PanelId::Map => '5',
        }
    }

    /// Panel for a shortcut key
    pub fn from_shortcut(key: char) -> Option<PanelId> {
        PanelId::all().into_iter().find(|p| p.shortcut_key() == key)
    }

    /// Relative width within its grid row
    pub fn width_weight(&self) -> u16 {
        match self {
            PanelId::Signals => 2,
            PanelId::Agent => 1,
            PanelId::Queues => 1,
            PanelId::Map => 2,
            PanelId::Alerts => 3,
        }
    }
}

/// Panel visibility configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelVisibility {
    pub signals: bool,
    pub queues: bool,
    pub agent: bool,
    pub alerts: bool,
    pub map: bool,
}

impl PanelVisibility {
    pub fn all_visible() -> Self {
        Self {
            signals: true,
            queues: true,
            agent: true,
            alerts: true,
            map: true,
        }
    }

    pub fn none_visible() -> Self {
        Self {
            signals: false,
            queues: false,
            agent: false,
            alerts: false,
            map: false,
        }
    }

    /// Only the listed panels visible
    pub fn only(panels: &[PanelId]) -> Self {
        let mut visibility = Self::none_visible();
        for panel in panels {
            visibility.set_visible(*panel, true);
        }
        visibility
    }

    pub fn is_visible(&self, panel: PanelId) -> bool {
        match panel {
            PanelId::Signals => self.signals,
            PanelId::Queues => self.queues,
            PanelId::Agent => self.agent,
            PanelId::Alerts => self.alerts,
            PanelId::Map => self.map,
        }
    }

    pub fn set_visible(&mut self, panel: PanelId, visible: bool) {
        match panel {
            PanelId::Signals => self.signals = visible,
            PanelId::Queues => self.queues = visible,
            PanelId::Agent => self.agent = visible,
            PanelId::Alerts => self.alerts = visible,
            PanelId::Map => self.map = visible,
        }
    }

    pub fn toggle(&mut self, panel: PanelId) {
        let current = self.is_visible(panel);
        self.set_visible(panel, !current);
    }

    pub fn visible_count(&self) -> usize {
        PanelId::all()
            .iter()
            .filter(|p| self.is_visible(**p))
            .count()
    }
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self::all_visible()
    }
}

/// Named visibility preset
#[derive(Debug, Clone)]
pub struct LayoutPreset {
    pub name: String,
    pub visibility: PanelVisibility,
}

impl LayoutPreset {
    pub fn new(name: impl Into<String>, visibility: PanelVisibility) -> Self {
        Self {
            name: name.into(),
            visibility,
        }
    }

    pub fn default_presets() -> Vec<LayoutPreset> {
        vec![
            Self::new("All Panels", PanelVisibility::all_visible()),
            Self::new(
                "Minimal",
                PanelVisibility::only(&[PanelId::Signals, PanelId::Alerts]),
            ),
            Self::new(
                "Operations",
                PanelVisibility::only(&[PanelId::Signals, PanelId::Queues, PanelId::Alerts]),
            ),
            Self::new(
                "Agent Focus",
                PanelVisibility::only(&[PanelId::Agent, PanelId::Alerts]),
            ),
        ]
    }
}

/// One row of the resolved layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRow {
    pub height: Constraint,
    pub panels: Vec<(PanelId, Constraint)>,
}

/// Panel manager - controls visibility and layout
pub struct PanelManager {
    visibility: PanelVisibility,
    presets: Vec<LayoutPreset>,
    current_preset_index: Option<usize>,
}

impl PanelManager {
    pub fn new() -> Self {
        Self {
            visibility: PanelVisibility::default(),
            presets: LayoutPreset::default_presets(),
            current_preset_index: Some(0),
        }
    }

    pub fn toggle_panel(&mut self, panel: PanelId) {
        self.visibility.toggle(panel);
        self.current_preset_index = None;
    }

    pub fn is_panel_visible(&self, panel: PanelId) -> bool {
        self.visibility.is_visible(panel)
    }

    pub fn show_all(&mut self) {
        self.select_preset(0);
    }

    pub fn hide_all(&mut self) {
        self.visibility = PanelVisibility::none_visible();
        self.current_preset_index = None;
    }

    /// Advance to the next preset, wrapping around; a custom layout restarts at the first
    pub fn cycle_preset(&mut self) {
        let next = match self.current_preset_index {
            Some(index) => (index + 1) % self.presets.len(),
            None => 0,
        };
        self.select_preset(next);
    }

    fn select_preset(&mut self, index: usize) {
        if let Some(preset) = self.presets.get(index) {
            self.visibility = preset.visibility.clone();
            self.current_preset_index = Some(index);
        }
    }

    pub fn current_preset_name(&self) -> Option<&str> {
        self.current_preset_index
            .and_then(|idx| self.presets.get(idx))
            .map(|p| p.name.as_str())
    }

    pub fn visible_count(&self) -> usize {
        self.visibility.visible_count()
    }

    /// Grid rows holding at least one visible panel, with their constraints
    pub fn layout_rows(&self) -> Vec<LayoutRow> {
        GRID.iter()
            .filter_map(|(height, row)| {
                let panels: Vec<(PanelId, Constraint)> = row
                    .iter()
                    .filter(|p| self.visibility.is_visible(**p))
                    .map(|p| (*p, Constraint::Fill(p.width_weight())))
                    .collect();

                if panels.is_empty() {
                    None
                } else {
                    Some(LayoutRow {
                        height: Constraint::Fill(*height),
                        panels,
                    })
                }
            })
            .collect()
    }
}

impl Default for PanelManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_visibility_default() {
        let vis = PanelVisibility::default();
        assert_eq!(vis.visible_count(), 5);
        assert!(vis.is_visible(PanelId::Signals));
    }

    #[test]
    fn test_panel_visibility_toggle() {
        let mut vis = PanelVisibility::default();
        vis.toggle(PanelId::Map);
        assert!(!vis.is_visible(PanelId::Map));
        vis.toggle(PanelId::Map);
        assert!(vis.is_visible(PanelId::Map));
    }

    #[test]
    fn test_panel_manager_toggle_clears_preset() {
        let mut manager = PanelManager::new();
        assert_eq!(manager.current_preset_name(), Some("All Panels"));

        manager.toggle_panel(PanelId::Agent);
        assert!(!manager.is_panel_visible(PanelId::Agent));
        assert_eq!(manager.current_preset_name(), None);
    }

    #[test]
    fn test_presets() {
        let mut manager = PanelManager::new();
        manager.cycle_preset();
        assert_eq!(manager.current_preset_name(), Some("Minimal"));
        assert_eq!(manager.visible_count(), 2);
        assert!(manager.is_panel_visible(PanelId::Signals));
        assert!(manager.is_panel_visible(PanelId::Alerts));
    }

    #[test]
    fn test_cycle_preset_wraps() {
        let mut manager = PanelManager::new();
        let count = LayoutPreset::default_presets().len();
        for _ in 0..count {
            manager.cycle_preset();
        }
        assert_eq!(manager.current_preset_name(), Some("All Panels"));

        manager.toggle_panel(PanelId::Map);
        manager.cycle_preset();
        assert_eq!(manager.current_preset_name(), Some("All Panels"));
    }

    #[test]
    fn test_show_hide_all() {
        let mut manager = PanelManager::new();
        manager.hide_all();
        assert_eq!(manager.visible_count(), 0);
        assert!(manager.layout_rows().is_empty());

        manager.show_all();
        assert_eq!(manager.visible_count(), 5);
    }

    #[test]
    fn test_layout_rows_full_grid() {
        let rows = PanelManager::new().layout_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0].panels,
            vec![
                (PanelId::Signals, Constraint::Fill(2)),
                (PanelId::Agent, Constraint::Fill(1)),
            ]
        );
        assert_eq!(rows[2].panels, vec![(PanelId::Alerts, Constraint::Fill(3))]);
    }

    #[test]
    fn test_layout_rows_collapse() {
        let mut manager = PanelManager::new();
        manager.toggle_panel(PanelId::Queues);
        manager.toggle_panel(PanelId::Map);

        let rows = manager.layout_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].panels[0].0, PanelId::Alerts);
    }

    #[test]
    fn test_panel_shortcuts() {
        for panel in PanelId::all() {
            assert_eq!(PanelId::from_shortcut(panel.shortcut_key()), Some(panel));
        }
        assert_eq!(PanelId::from_shortcut('9'), None);
    }
}
