//! Navigation model: the highlighted menu entry, the mobile menu, and
//! the in-flight programmatic scroll.

use crate::anim::Ease;
use crate::sections::SectionId;
use std::time::{Duration, Instant};

pub struct NavState {
    pub(in crate::app) active: SectionId,
    pub(in crate::app) menu_open: bool,
    /// While set, the observer's derived active section is not adopted.
    pub(in crate::app) glide: Option<ScrollGlide>,
}

impl NavState {
    pub(in crate::app) fn new() -> Self {
        NavState {
            active: SectionId::Home,
            menu_open: false,
            glide: None,
        }
    }

    /// Adopt the observer's derived section unless a programmatic
    /// scroll is in flight. `None` retains the previous answer.
    pub(in crate::app) fn adopt_derived(&mut self, derived: Option<SectionId>) {
        if self.glide.is_some() {
            return;
        }
        if let Some(section) = derived {
            self.active = section;
        }
    }
}

/// A smooth scroll from one offset to another under an ease-out curve.
#[derive(Debug, Clone, Copy)]
pub struct ScrollGlide {
    pub(in crate::app) from: f32,
    pub(in crate::app) to: f32,
    pub(in crate::app) started_at: Instant,
    pub(in crate::app) duration: Duration,
}

impl ScrollGlide {
    pub(in crate::app) fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        ScrollGlide {
            from,
            to,
            started_at,
            duration: duration.max(Duration::from_millis(1)),
        }
    }

    pub(in crate::app) fn offset_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * Ease::OutCubic.apply(t)
    }

    pub(in crate::app) fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passive_updates_are_suppressed_mid_glide() {
        let mut nav = NavState::new();
        nav.glide = Some(ScrollGlide::new(
            0.0,
            500.0,
            Instant::now(),
            Duration::from_millis(600),
        ));
        nav.active = SectionId::Projects;
        nav.adopt_derived(Some(SectionId::Home));
        assert_eq!(nav.active, SectionId::Projects);

        nav.glide = None;
        nav.adopt_derived(Some(SectionId::Home));
        assert_eq!(nav.active, SectionId::Home);
    }

    #[test]
    fn no_derived_section_retains_the_previous_one() {
        let mut nav = NavState::new();
        nav.active = SectionId::Skills;
        nav.adopt_derived(None);
        assert_eq!(nav.active, SectionId::Skills);
    }

    #[test]
    fn glide_starts_at_from_and_ends_at_to() {
        let start = Instant::now();
        let glide = ScrollGlide::new(100.0, 400.0, start, Duration::from_millis(500));
        assert_eq!(glide.offset_at(start), 100.0);
        let done = start + Duration::from_millis(500);
        assert!(glide.finished(done));
        assert!((glide.offset_at(done) - 400.0).abs() < 0.001);
    }
}
