//! The viewport observer: pure geometry over the current scroll offset
//! and the estimated section layout.
//!
//! Only mounted sections appear in the layout, so sections that are
//! still behind the deferred content load are skipped naturally.

use crate::sections::SectionId;

/// One mounted section's vertical band in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBand {
    pub id: SectionId,
    pub top: f32,
    pub height: f32,
}

impl SectionBand {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Scroll metrics plus the estimated layout, updated on every scroll
/// and resize message.
pub struct ViewportState {
    pub(in crate::app) scroll_y: f32,
    pub(in crate::app) viewport_width: f32,
    pub(in crate::app) viewport_height: f32,
    pub(in crate::app) content_height: f32,
    /// Mounted sections in document order.
    pub(in crate::app) layout: Vec<SectionBand>,
}

impl ViewportState {
    pub(in crate::app) fn new(viewport_width: f32, viewport_height: f32) -> Self {
        ViewportState {
            scroll_y: 0.0,
            viewport_width: viewport_width.max(0.0),
            viewport_height: viewport_height.max(0.0),
            content_height: 0.0,
            layout: Vec::new(),
        }
    }

    pub(in crate::app) fn band_for(&self, id: SectionId) -> Option<SectionBand> {
        self.layout.iter().copied().find(|band| band.id == id)
    }

    /// The first section in document order straddling the detection
    /// line, or `None` when nothing does (caller keeps the previous
    /// answer in that case).
    pub(in crate::app) fn active_section(&self, line_px: f32) -> Option<SectionId> {
        self.layout
            .iter()
            .find(|band| {
                let top = band.top - self.scroll_y;
                let bottom = band.bottom() - self.scroll_y;
                top <= line_px && bottom >= line_px
            })
            .map(|band| band.id)
    }

    /// Sections with any part inside the viewport, in document order.
    pub(in crate::app) fn visible_sections(&self) -> Vec<SectionId> {
        self.layout
            .iter()
            .filter(|band| {
                let top = band.top - self.scroll_y;
                let bottom = band.bottom() - self.scroll_y;
                bottom >= 0.0 && top <= self.viewport_height
            })
            .map(|band| band.id)
            .collect()
    }

    /// The furthest offset the page can scroll to.
    pub(in crate::app) fn max_scroll(&self) -> f32 {
        let estimated = self
            .layout
            .last()
            .map(SectionBand::bottom)
            .unwrap_or(0.0)
            .max(self.content_height);
        (estimated - self.viewport_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(heights: &[(SectionId, f32)]) -> Vec<SectionBand> {
        let mut top = 0.0;
        heights
            .iter()
            .map(|&(id, height)| {
                let band = SectionBand { id, top, height };
                top += height;
                band
            })
            .collect()
    }

    fn viewport_with(layout: Vec<SectionBand>) -> ViewportState {
        let mut viewport = ViewportState::new(1280.0, 800.0);
        viewport.content_height = layout.last().map(SectionBand::bottom).unwrap_or(0.0);
        viewport.layout = layout;
        viewport
    }

    #[test]
    fn active_section_tracks_the_detection_line() {
        let mut viewport = viewport_with(stacked(&[
            (SectionId::Home, 800.0),
            (SectionId::Projects, 900.0),
            (SectionId::Contact, 700.0),
        ]));

        viewport.scroll_y = 0.0;
        assert_eq!(viewport.active_section(100.0), Some(SectionId::Home));

        // Home's bottom sits above the line once we scroll past it.
        viewport.scroll_y = 750.0;
        assert_eq!(viewport.active_section(100.0), Some(SectionId::Projects));
    }

    #[test]
    fn first_in_document_order_wins_a_tie() {
        // A zero-height boundary makes both neighbors satisfy the
        // line condition at the shared edge.
        let layout = vec![
            SectionBand {
                id: SectionId::Home,
                top: 0.0,
                height: 100.0,
            },
            SectionBand {
                id: SectionId::Projects,
                top: 100.0,
                height: 500.0,
            },
        ];
        let mut viewport = viewport_with(layout);
        viewport.scroll_y = 0.0;
        // Line at exactly 100: Home's bottom == 100 and Projects' top == 100.
        assert_eq!(viewport.active_section(100.0), Some(SectionId::Home));
    }

    #[test]
    fn no_match_returns_none_for_caller_side_retention() {
        let mut viewport = viewport_with(stacked(&[(SectionId::Home, 300.0)]));
        viewport.scroll_y = 2000.0;
        assert_eq!(viewport.active_section(100.0), None);
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        // Only Home is mounted; the detection line inside where
        // Projects would be resolves to nothing rather than erroring.
        let mut viewport = viewport_with(stacked(&[(SectionId::Home, 800.0)]));
        viewport.scroll_y = 900.0;
        assert_eq!(viewport.active_section(100.0), None);
        assert!(viewport.band_for(SectionId::Projects).is_none());
    }

    #[test]
    fn visibility_means_any_intersection() {
        let mut viewport = viewport_with(stacked(&[
            (SectionId::Home, 800.0),
            (SectionId::Projects, 900.0),
            (SectionId::Contact, 700.0),
        ]));

        viewport.scroll_y = 0.0;
        assert_eq!(viewport.visible_sections(), vec![SectionId::Home]);

        // One pixel of Projects peeking in counts.
        viewport.scroll_y = 1.0;
        assert_eq!(
            viewport.visible_sections(),
            vec![SectionId::Home, SectionId::Projects]
        );

        viewport.scroll_y = 1701.0;
        assert_eq!(viewport.visible_sections(), vec![SectionId::Contact]);
    }

    #[test]
    fn max_scroll_never_goes_negative() {
        let viewport = viewport_with(stacked(&[(SectionId::Home, 300.0)]));
        assert_eq!(viewport.max_scroll(), 0.0);
    }
}
