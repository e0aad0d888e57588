//! Scroll progress: raw ratio, spring smoothing, and the scroll-to-top
//! affordance.

use crate::anim::Spring;
use crate::config::AppConfig;

/// Raw reading progress for a scroll offset. Defined as 0 whenever the
/// content fits inside the viewport.
pub(in crate::app) fn progress_ratio(scroll_y: f32, content_height: f32, viewport_height: f32) -> f32 {
    let scrollable = content_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Strict threshold: exactly at the boundary the control stays hidden.
pub(in crate::app) fn scroll_top_visible(scroll_y: f32, threshold_px: f32) -> bool {
    scroll_y > threshold_px
}

/// The smoothed value driving the progress bar.
pub struct ProgressState {
    pub(in crate::app) target: f32,
    spring: Spring,
}

impl ProgressState {
    pub(in crate::app) fn new(config: &AppConfig) -> Self {
        ProgressState {
            target: 0.0,
            spring: Spring::new(
                config.spring_stiffness,
                config.spring_damping,
                config.spring_rest_delta,
            ),
        }
    }

    pub(in crate::app) fn retarget(
        &mut self,
        scroll_y: f32,
        content_height: f32,
        viewport_height: f32,
    ) {
        self.target = progress_ratio(scroll_y, content_height, viewport_height);
    }

    pub(in crate::app) fn tick(&mut self, dt: f32) {
        self.spring.step(self.target, dt);
    }

    /// Skip the smoothing entirely (reduced-motion mode).
    pub(in crate::app) fn snap_to_target(&mut self) {
        self.spring.snap(self.target);
    }

    pub(in crate::app) fn value(&self) -> f32 {
        self.spring.position.clamp(0.0, 1.0)
    }

    pub(in crate::app) fn settled(&self) -> bool {
        self.spring.settled(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_matches_the_formula() {
        // H = 3000, V = 1000 → scrollable range 2000.
        assert_eq!(progress_ratio(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_ratio(500.0, 3000.0, 1000.0), 0.25);
        assert_eq!(progress_ratio(2000.0, 3000.0, 1000.0), 1.0);
        // Overscroll clamps.
        assert_eq!(progress_ratio(9000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn ratio_is_monotone_in_scroll_offset() {
        let mut previous = -1.0;
        for step in 0..=50 {
            let scroll = step as f32 * 40.0;
            let ratio = progress_ratio(scroll, 3000.0, 1000.0);
            assert!(ratio >= previous);
            previous = ratio;
        }
    }

    #[test]
    fn short_content_reports_zero_progress() {
        // Content fits in the viewport: no progress to report, at any offset.
        for scroll in [0.0, 10.0, 500.0] {
            assert_eq!(progress_ratio(scroll, 800.0, 800.0), 0.0);
            assert_eq!(progress_ratio(scroll, 400.0, 800.0), 0.0);
        }
    }

    #[test]
    fn scroll_top_threshold_is_strict() {
        assert!(!scroll_top_visible(99.0, 100.0));
        assert!(!scroll_top_visible(100.0, 100.0));
        assert!(scroll_top_visible(100.1, 100.0));
        assert!(scroll_top_visible(150.0, 100.0));
    }

    #[test]
    fn smoothed_value_approaches_the_target() {
        let config = AppConfig::default();
        let mut progress = ProgressState::new(&config);
        progress.retarget(1000.0, 3000.0, 1000.0);
        assert_eq!(progress.target, 0.5);
        for _ in 0..600 {
            progress.tick(1.0 / 60.0);
        }
        assert!(progress.settled());
        assert!((progress.value() - 0.5).abs() < 0.01);
    }

    #[test]
    fn snap_skips_the_smoothing() {
        let config = AppConfig::default();
        let mut progress = ProgressState::new(&config);
        progress.retarget(2000.0, 3000.0, 1000.0);
        progress.snap_to_target();
        assert_eq!(progress.value(), 1.0);
        assert!(progress.settled());
    }
}
