use super::super::state::{
    ABOUT_BASE_PX, ABOUT_PARAGRAPH_PX, App, CONTACT_HEIGHT_PX, EXPERIENCE_DETAIL_LINE_PX,
    EXPERIENCE_ITEM_PX, HERO_MIN_HEIGHT_PX, PROJECT_CARD_PX, SECTION_HEADER_PX,
    SECTION_PADDING_PX, SKILL_GROUP_BASE_PX, SKILL_ROW_PX, SectionBand, THREE_COLUMN_MIN_WIDTH_PX,
    TWO_COLUMN_MIN_WIDTH_PX, scroll_top_visible,
};
use super::Effect;
use crate::sections::{ALL_SECTIONS, SectionId};
use iced::widget::scrollable::AbsoluteOffset;
use std::time::Instant;
use tracing::debug;

impl App {
    pub(super) fn handle_scrolled(
        &mut self,
        offset: AbsoluteOffset,
        viewport_width: f32,
        viewport_height: f32,
        content_height: f32,
    ) {
        // Scroll reports arrive outside the tick stream; keep the
        // shared clock fresh so reveal timestamps are not stale.
        self.now = Instant::now();

        let scroll_y = Self::sanitize_px(offset.y);
        let viewport_width = Self::sanitize_px(viewport_width);
        let viewport_height = Self::sanitize_px(viewport_height);
        let content_height = Self::sanitize_px(content_height);

        let dims_changed = (viewport_width - self.viewport.viewport_width).abs() > 0.5
            || (viewport_height - self.viewport.viewport_height).abs() > 0.5;
        self.viewport.viewport_width = viewport_width;
        self.viewport.viewport_height = viewport_height;
        self.viewport.content_height = content_height;
        self.viewport.scroll_y = scroll_y;
        if dims_changed {
            self.relayout();
        }

        self.navbar_solid = scroll_y > self.config.navbar_solid_threshold_px;

        let derived = self.viewport.active_section(self.config.active_line_px);
        let before = self.nav.active;
        self.nav.adopt_derived(derived);
        if self.nav.active != before {
            debug!(section = %self.nav.active, "Active section changed");
        }

        let now = self.now;
        for section in self.viewport.visible_sections() {
            if self.reveal.observe(section, now) {
                debug!(section = %section, "Revealed section");
            }
        }

        self.progress
            .retarget(scroll_y, content_height, viewport_height);
        if !self.config.animations {
            self.progress.snap_to_target();
        }
    }

    pub(super) fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let dt = now
            .saturating_duration_since(self.now)
            .as_secs_f32()
            .min(0.25);
        self.now = now;

        if !self.progress.settled() {
            self.progress.tick(dt);
        }

        if let Some(glide) = self.nav.glide {
            if glide.finished(now) {
                self.nav.glide = None;
                effects.push(Effect::SnapScrollTo(glide.to));
            } else {
                effects.push(Effect::SnapScrollTo(glide.offset_at(now)));
            }
        }

        if self
            .contact
            .maybe_reset(now, self.status_display_duration())
        {
            debug!("Contact status cleared after display window");
        }
    }

    pub(in crate::app) fn scroll_top_is_visible(&self) -> bool {
        scroll_top_visible(self.viewport.scroll_y, self.config.scroll_top_threshold_px)
    }

    fn sanitize_px(value: f32) -> f32 {
        if value.is_finite() { value.max(0.0) } else { 0.0 }
    }

    /// Rebuild the estimated section layout. Deferred sections only
    /// get a band once the content has arrived; until then they simply
    /// do not exist as far as geometry is concerned.
    pub(in crate::app) fn relayout(&mut self) {
        let mut layout = Vec::with_capacity(ALL_SECTIONS.len());
        let mut top = 0.0;
        for section in ALL_SECTIONS {
            if section.is_deferred() && self.content.is_none() {
                continue;
            }
            let height = self.estimated_section_height(section);
            layout.push(SectionBand {
                id: section,
                top,
                height,
            });
            top += height;
        }
        self.viewport.layout = layout;
    }

    /// Rough per-section heights. Keep in sync with the widget sizes in
    /// `view.rs`; precision only affects where highlights flip, not
    /// whether the page works.
    fn estimated_section_height(&self, section: SectionId) -> f32 {
        let content = self.content.as_ref();
        match section {
            SectionId::Home => self.viewport.viewport_height.max(HERO_MIN_HEIGHT_PX),
            SectionId::Projects => {
                let count = content.map(|c| c.projects.len()).unwrap_or(0);
                let columns = self.project_grid_columns();
                let rows = count.div_ceil(columns).max(1);
                SECTION_HEADER_PX + rows as f32 * PROJECT_CARD_PX + SECTION_PADDING_PX
            }
            SectionId::Experience => {
                let mut height = SECTION_HEADER_PX + SECTION_PADDING_PX;
                if let Some(content) = content {
                    for experience in &content.experience {
                        height += EXPERIENCE_ITEM_PX;
                        if self.expanded_experience.contains(&experience.id) {
                            let lines = experience.responsibilities.len()
                                + experience.achievements.len()
                                + 3;
                            height += lines as f32 * EXPERIENCE_DETAIL_LINE_PX;
                        }
                    }
                }
                height
            }
            SectionId::About => {
                let paragraphs = content.map(|c| c.profile.bio.len()).unwrap_or(0);
                ABOUT_BASE_PX + paragraphs as f32 * ABOUT_PARAGRAPH_PX + SECTION_PADDING_PX
            }
            SectionId::Skills => {
                let mut height = SECTION_HEADER_PX + SECTION_PADDING_PX;
                if let Some(content) = content {
                    for group in &content.skill_groups {
                        height += SKILL_GROUP_BASE_PX + group.skills.len() as f32 * SKILL_ROW_PX;
                    }
                }
                height
            }
            SectionId::Contact => CONTACT_HEIGHT_PX,
        }
    }

    pub(in crate::app) fn project_grid_columns(&self) -> usize {
        if self.viewport.viewport_width >= THREE_COLUMN_MIN_WIDTH_PX {
            3
        } else if self.viewport.viewport_width >= TWO_COLUMN_MIN_WIDTH_PX {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::config::AppConfig;
    use crate::content::PortfolioContent;
    use std::path::PathBuf;
    use std::time::Duration;

    fn sample_content() -> PortfolioContent {
        serde_json::from_str(
            r#"{
                "profile": {
                    "name": "Ada Example",
                    "title": "Frontend Developer",
                    "tagline": "Building things",
                    "email": "ada@example.com",
                    "bio": ["One.", "Two."]
                },
                "projects": [
                    { "id": "a", "title": "Alpha" },
                    { "id": "b", "title": "Beta" },
                    { "id": "c", "title": "Gamma" },
                    { "id": "d", "title": "Delta" }
                ],
                "experience": [
                    {
                        "id": "acme",
                        "company": "Acme",
                        "position": "Engineer",
                        "responsibilities": ["Build", "Ship"],
                        "achievements": ["Prize"]
                    }
                ],
                "skill_groups": [
                    { "name": "Languages", "skills": [
                        { "name": "Rust", "level": 90 },
                        { "name": "TypeScript", "level": 80 }
                    ] }
                ]
            }"#,
        )
        .unwrap()
    }

    fn build_test_app() -> App {
        let (mut app, _task) =
            App::bootstrap(AppConfig::default(), PathBuf::from("/tmp/portfolio.json"));
        app.apply_loaded_content(sample_content());
        // Prime geometry the way the first on_scroll report would.
        scroll_to(&mut app, 0.0);
        app
    }

    fn scroll_to(app: &mut App, y: f32) {
        let content_height = app
            .viewport
            .layout
            .last()
            .map(|band| band.bottom())
            .unwrap_or(0.0);
        let _ = app.reduce(Message::Scrolled {
            offset: AbsoluteOffset { x: 0.0, y },
            viewport_width: 1280.0,
            viewport_height: 800.0,
            content_width: 1280.0,
            content_height,
        });
    }

    #[test]
    fn thresholds_follow_the_end_to_end_scenario() {
        let mut app = build_test_app();

        scroll_to(&mut app, 0.0);
        assert_eq!(app.nav.active, SectionId::Home);
        assert!(!app.navbar_solid);
        assert!(!app.scroll_top_is_visible());

        scroll_to(&mut app, 60.0);
        assert!(app.navbar_solid);
        assert!(!app.scroll_top_is_visible());

        scroll_to(&mut app, 150.0);
        assert!(app.scroll_top_is_visible());

        // Scroll-to-top glides back; once the page reports offset 0
        // the control hides again.
        let effects = app.reduce(Message::ScrollToTop);
        assert!(effects.is_empty());
        assert!(app.nav.glide.is_some());
        let end = app.now + Duration::from_secs(2);
        let effects = app.reduce(Message::Tick(end));
        assert!(matches!(effects.as_slice(), [Effect::SnapScrollTo(y)] if *y == 0.0));
        assert!(app.nav.glide.is_none());
        scroll_to(&mut app, 0.0);
        assert!(!app.scroll_top_is_visible());
        assert!(!app.navbar_solid);
    }

    #[test]
    fn active_section_follows_scroll_and_retains_on_gaps() {
        let mut app = build_test_app();
        let projects_top = app.viewport.band_for(SectionId::Projects).unwrap().top;

        scroll_to(&mut app, projects_top - 50.0);
        assert_eq!(app.nav.active, SectionId::Projects);

        // Way past the end nothing straddles the line; the previous
        // answer sticks instead of flickering to an undefined state.
        scroll_to(&mut app, 1_000_000.0);
        let retained = app.nav.active;
        scroll_to(&mut app, 1_000_001.0);
        assert_eq!(app.nav.active, retained);
    }

    #[test]
    fn reveal_latches_do_not_replay_on_rescroll() {
        let mut app = build_test_app();
        assert!(!app.reveal.is_revealed(SectionId::Contact));

        let contact_top = app.viewport.band_for(SectionId::Contact).unwrap().top;
        scroll_to(&mut app, contact_top - 100.0);
        assert!(app.reveal.is_revealed(SectionId::Contact));

        scroll_to(&mut app, 0.0);
        scroll_to(&mut app, contact_top - 100.0);
        assert!(app.reveal.is_revealed(SectionId::Contact));
        // Animation progress stays finished rather than restarting.
        let after = app.now + Duration::from_secs(10);
        assert_eq!(
            app.reveal
                .progress(SectionId::Contact, after, app.reveal_duration()),
            1.0
        );
    }

    #[test]
    fn expanding_a_timeline_entry_grows_the_layout() {
        let mut app = build_test_app();
        let before = app.viewport.band_for(SectionId::Experience).unwrap().height;
        let _ = app.reduce(Message::ToggleExperience("acme".to_string()));
        let after = app.viewport.band_for(SectionId::Experience).unwrap().height;
        assert!(after > before);
        let _ = app.reduce(Message::ToggleExperience("acme".to_string()));
        let collapsed = app.viewport.band_for(SectionId::Experience).unwrap().height;
        assert_eq!(collapsed, before);
    }

    #[test]
    fn progress_spring_settles_toward_the_ratio() {
        let mut app = build_test_app();
        let max = app.viewport.max_scroll();
        scroll_to(&mut app, max);
        assert_eq!(app.progress.target, 1.0);

        let mut now = app.now;
        for _ in 0..600 {
            now += Duration::from_millis(16);
            let _ = app.reduce(Message::Tick(now));
        }
        assert!((app.progress.value() - 1.0).abs() < 0.01);
        assert!(app.progress.settled());
    }

    #[test]
    fn narrow_viewports_use_a_single_project_column() {
        let mut app = build_test_app();
        let _ = app.reduce(Message::Scrolled {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            viewport_width: 600.0,
            viewport_height: 800.0,
            content_width: 600.0,
            content_height: 4000.0,
        });
        assert_eq!(app.project_grid_columns(), 1);
    }
}
