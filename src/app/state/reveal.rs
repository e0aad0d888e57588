//! Reveal-once bookkeeping.
//!
//! Each section animates in exactly once per session, the first time
//! any part of it intersects the viewport. The latch is never cleared:
//! scrolling away and back must not replay the animation.

use crate::anim::Ease;
use crate::sections::SectionId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub struct RevealState {
    latched: HashMap<SectionId, Instant>,
}

impl RevealState {
    pub(in crate::app) fn new() -> Self {
        RevealState {
            latched: HashMap::new(),
        }
    }

    /// Latch `section` if it is not already latched. Returns whether
    /// this call was the one that set it, i.e. the one-shot signal.
    pub(in crate::app) fn observe(&mut self, section: SectionId, now: Instant) -> bool {
        if self.latched.contains_key(&section) {
            return false;
        }
        self.latched.insert(section, now);
        true
    }

    pub(in crate::app) fn is_revealed(&self, section: SectionId) -> bool {
        self.latched.contains_key(&section)
    }

    /// Enter-animation progress: 0.0 before the latch, eased 0..1
    /// while animating, 1.0 forever after.
    pub(in crate::app) fn progress(
        &self,
        section: SectionId,
        now: Instant,
        duration: Duration,
    ) -> f32 {
        let Some(started_at) = self.latched.get(&section) else {
            return 0.0;
        };
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(*started_at);
        let t = elapsed.as_secs_f32() / duration.as_secs_f32();
        Ease::OutCubic.apply(t)
    }

    pub(in crate::app) fn animating(&self, now: Instant, duration: Duration) -> bool {
        self.latched
            .values()
            .any(|started_at| now.saturating_duration_since(*started_at) < duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_exactly_once() {
        let mut reveal = RevealState::new();
        let now = Instant::now();
        assert!(reveal.observe(SectionId::Projects, now));
        // Visibility flipping off and on again never re-triggers.
        assert!(!reveal.observe(SectionId::Projects, now));
        assert!(!reveal.observe(SectionId::Projects, now + Duration::from_secs(60)));
        assert!(reveal.is_revealed(SectionId::Projects));
    }

    #[test]
    fn sections_latch_independently() {
        let mut reveal = RevealState::new();
        let now = Instant::now();
        assert!(reveal.observe(SectionId::Skills, now));
        assert!(!reveal.is_revealed(SectionId::Contact));
        assert!(reveal.observe(SectionId::Contact, now));
    }

    #[test]
    fn progress_runs_zero_to_one_and_stays() {
        let mut reveal = RevealState::new();
        let start = Instant::now();
        let duration = Duration::from_millis(600);

        assert_eq!(reveal.progress(SectionId::About, start, duration), 0.0);
        reveal.observe(SectionId::About, start);
        assert_eq!(reveal.progress(SectionId::About, start, duration), 0.0);

        let mid = reveal.progress(SectionId::About, start + Duration::from_millis(300), duration);
        assert!(mid > 0.0 && mid < 1.0);

        let after = start + Duration::from_secs(5);
        assert_eq!(reveal.progress(SectionId::About, after, duration), 1.0);
        assert!(!reveal.animating(after, duration));
    }
}
