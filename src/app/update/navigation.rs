use super::super::state::{App, ScrollGlide};
use super::Effect;
use crate::sections::SectionId;
use std::time::Duration;
use tracing::{debug, info};

impl App {
    /// Explicit activation from the menu: highlight immediately, glide
    /// the page so the section's top clears the fixed bar, close the
    /// mobile menu. Activating a section that is not mounted yet only
    /// closes the menu.
    pub(super) fn handle_section_activated(
        &mut self,
        section: SectionId,
        effects: &mut Vec<Effect>,
    ) {
        self.nav.menu_open = false;

        let Some(band) = self.viewport.band_for(section) else {
            debug!(section = %section, "Ignoring activation of unmounted section");
            return;
        };

        self.nav.active = section;
        let target = (band.top - self.config.nav_offset_px)
            .clamp(0.0, self.viewport.max_scroll());
        info!(section = %section, target, "Navigating to section");
        self.start_glide(target, effects);
    }

    /// Idempotent at the top: nothing moves when already there.
    pub(super) fn handle_scroll_to_top(&mut self, effects: &mut Vec<Effect>) {
        if self.viewport.scroll_y <= 0.0 && self.nav.glide.is_none() {
            return;
        }
        debug!("Scrolling back to top");
        self.start_glide(0.0, effects);
    }

    pub(super) fn handle_toggle_menu(&mut self) {
        self.nav.menu_open = !self.nav.menu_open;
        debug!(open = self.nav.menu_open, "Toggled mobile menu");
    }

    fn start_glide(&mut self, target: f32, effects: &mut Vec<Effect>) {
        if !self.config.animations || self.config.scroll_duration_secs <= 0.0 {
            self.nav.glide = None;
            effects.push(Effect::SnapScrollTo(target));
            return;
        }
        self.nav.glide = Some(ScrollGlide::new(
            self.viewport.scroll_y,
            target,
            self.now,
            Duration::from_secs_f32(self.config.scroll_duration_secs),
        ));
    }
}
