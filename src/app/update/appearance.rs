use super::super::state::{App, NAV_BAR_HEIGHT_PX, PROGRESS_BAR_HEIGHT_PX};
use super::Effect;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        let next = match self.config.theme {
            crate::config::ThemeMode::Night => crate::config::ThemeMode::Day,
            crate::config::ThemeMode::Day => crate::config::ThemeMode::Night,
        };
        info!(
            night_mode = matches!(next, crate::config::ThemeMode::Night),
            "Toggled theme"
        );
        self.config.theme = next;
        effects.push(Effect::SaveConfig);
    }

    pub(super) fn handle_toggle_experience(&mut self, id: String) {
        if !self.expanded_experience.remove(&id) {
            self.expanded_experience.insert(id);
        }
        // Expansion changes the estimated geometry below the entry.
        self.relayout();
    }

    pub(super) fn handle_window_resized(
        &mut self,
        width: f32,
        height: f32,
        effects: &mut Vec<Effect>,
    ) {
        if !width.is_finite() || !height.is_finite() {
            return;
        }
        self.config.window_width = width.max(1.0);
        self.config.window_height = height.max(1.0);
        self.viewport.viewport_width = width.max(0.0);
        self.viewport.viewport_height =
            (height - NAV_BAR_HEIGHT_PX - PROGRESS_BAR_HEIGHT_PX).max(0.0);
        self.relayout();
        debug!(width, height, "Window resized");
        effects.push(Effect::SaveConfig);
    }

    pub(super) fn handle_window_moved(&mut self, x: f32, y: f32, effects: &mut Vec<Effect>) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.config.window_pos_x = Some(x);
        self.config.window_pos_y = Some(y);
        effects.push(Effect::SaveConfig);
    }
}
