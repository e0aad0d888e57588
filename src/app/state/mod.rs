mod constants;
mod contact;
mod nav;
mod progress;
mod reveal;
mod viewport;

use crate::config::AppConfig;
use crate::content::PortfolioContent;
use iced::Task;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use contact::{ContactPhase, ContactState};
pub(in crate::app) use nav::{NavState, ScrollGlide};
pub(in crate::app) use progress::{ProgressState, scroll_top_visible};
pub(in crate::app) use reveal::RevealState;
pub(in crate::app) use viewport::{SectionBand, ViewportState};

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) content_path: PathBuf,
    pub(super) content: Option<PortfolioContent>,
    pub(super) content_loading: bool,
    pub(super) content_error: Option<String>,
    pub(super) viewport: ViewportState,
    pub(super) nav: NavState,
    pub(super) reveal: RevealState,
    pub(super) progress: ProgressState,
    pub(super) contact: ContactState,
    pub(super) expanded_experience: HashSet<String>,
    pub(super) navbar_solid: bool,
    /// Clock sample from the latest tick; the view and the timed
    /// decays read this instead of calling `Instant::now`.
    pub(super) now: Instant,
}

impl App {
    pub(super) fn bootstrap(mut config: AppConfig, content_path: PathBuf) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let viewport = ViewportState::new(
            config.window_width,
            (config.window_height - NAV_BAR_HEIGHT_PX - PROGRESS_BAR_HEIGHT_PX).max(0.0),
        );
        let progress = ProgressState::new(&config);
        let mut app = App {
            config,
            content_path: content_path.clone(),
            content: None,
            content_loading: true,
            content_error: None,
            viewport,
            nav: NavState::new(),
            reveal: RevealState::new(),
            progress,
            contact: ContactState::new(),
            expanded_experience: HashSet::new(),
            navbar_solid: false,
            now: Instant::now(),
        };

        app.relayout();
        // The hero is visible from the first frame; latch it so it
        // never re-animates, matching an always-mounted landing block.
        for section in app.viewport.visible_sections() {
            app.reveal.observe(section, app.now);
        }

        tracing::info!(
            content = %content_path.display(),
            night_mode = matches!(app.config.theme, crate::config::ThemeMode::Night),
            "Initialized portfolio state"
        );
        let init_task = App::load_content_task(content_path);
        (app, init_task)
    }

    pub(super) fn apply_loaded_content(&mut self, content: PortfolioContent) {
        // The load task completes outside the tick stream; refresh the
        // clock so mount-time reveals animate from now, not from the
        // last tick.
        self.now = Instant::now();
        self.content_loading = false;
        self.content_error = None;
        self.content = Some(content);
        self.relayout();
        // Sections already inside the viewport when they mount reveal
        // immediately; everything below the fold waits for scroll.
        let now = self.now;
        for section in self.viewport.visible_sections() {
            if self.reveal.observe(section, now) {
                tracing::debug!(section = %section, "Revealed section on mount");
            }
        }
    }

    pub(super) fn apply_content_failure(&mut self, error: String) {
        tracing::warn!("Deferred content load failed: {error}");
        self.content_loading = false;
        self.content_error = Some(error);
    }

    /// Whether the tick subscription must be running.
    pub(super) fn needs_ticks(&self) -> bool {
        self.nav.glide.is_some()
            || !self.progress.settled()
            || self.contact.status_pending()
            || (self.config.animations
                && self
                    .reveal
                    .animating(self.now, self.reveal_duration()))
    }

    pub(super) fn reveal_duration(&self) -> Duration {
        Duration::from_secs_f32(self.config.reveal_duration_secs.max(0.0))
    }

    pub(super) fn status_display_duration(&self) -> Duration {
        Duration::from_secs_f32(self.config.status_display_secs.max(0.0))
    }
}

pub(super) fn clamp_config(config: &mut AppConfig) {
    fn sanitize(value: &mut f32, fallback: f32, min: f32, max: f32) {
        if !value.is_finite() {
            *value = fallback;
        }
        *value = value.clamp(min, max);
    }

    fn normalize_key_binding(value: &mut String, fallback: &str) {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            *value = fallback.to_string();
        } else {
            *value = normalized;
        }
    }

    sanitize(&mut config.window_width, 1280.0, 320.0, 7680.0);
    sanitize(&mut config.window_height, 860.0, 240.0, 4320.0);
    config.window_pos_x = config.window_pos_x.filter(|v| v.is_finite());
    config.window_pos_y = config.window_pos_y.filter(|v| v.is_finite());
    sanitize(&mut config.active_line_px, 100.0, 0.0, 1000.0);
    sanitize(&mut config.nav_offset_px, 80.0, 0.0, 400.0);
    sanitize(&mut config.navbar_solid_threshold_px, 50.0, 0.0, 2000.0);
    sanitize(&mut config.scroll_top_threshold_px, 100.0, 0.0, 4000.0);
    sanitize(&mut config.spring_stiffness, 100.0, 1.0, 2000.0);
    sanitize(&mut config.spring_damping, 30.0, 0.0, 500.0);
    sanitize(&mut config.spring_rest_delta, 0.001, 0.000_01, 0.25);
    sanitize(&mut config.scroll_duration_secs, 0.6, 0.0, 5.0);
    sanitize(&mut config.reveal_duration_secs, 0.6, 0.0, 5.0);
    sanitize(&mut config.reveal_slide_px, 50.0, 0.0, 400.0);
    sanitize(&mut config.status_display_secs, 5.0, 0.5, 120.0);
    normalize_key_binding(&mut config.key_toggle_theme, "t");
    normalize_key_binding(&mut config.key_toggle_menu, "m");
    normalize_key_binding(&mut config.key_scroll_top, "g");
    normalize_key_binding(&mut config.key_quit, "q");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_repairs_nonsense_values() {
        let mut config = AppConfig::default();
        config.active_line_px = f32::NAN;
        config.nav_offset_px = -40.0;
        config.window_width = 10.0;
        config.key_quit = "  ".to_string();
        clamp_config(&mut config);
        assert_eq!(config.active_line_px, 100.0);
        assert_eq!(config.nav_offset_px, 0.0);
        assert_eq!(config.window_width, 320.0);
        assert_eq!(config.key_quit, "q");
    }

    #[test]
    fn bootstrap_mounts_only_the_hero() {
        let (app, _task) = App::bootstrap(AppConfig::default(), PathBuf::from("data/portfolio.json"));
        assert!(app.content.is_none());
        assert!(app.content_loading);
        assert_eq!(app.viewport.layout.len(), 1);
        assert_eq!(app.viewport.layout[0].id, crate::sections::SectionId::Home);
        assert!(app.reveal.is_revealed(crate::sections::SectionId::Home));
    }
}
