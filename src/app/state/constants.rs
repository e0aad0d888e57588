use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Fixed chrome and layout-estimate constants. Keep the estimates in
/// sync with the widget sizes used in `view.rs`.
pub(crate) const NAV_BAR_HEIGHT_PX: f32 = 64.0;
pub(crate) const PROGRESS_BAR_HEIGHT_PX: f32 = 4.0;

pub(crate) const SECTION_HEADER_PX: f32 = 200.0;
pub(crate) const SECTION_PADDING_PX: f32 = 80.0;
pub(crate) const HERO_MIN_HEIGHT_PX: f32 = 600.0;
pub(crate) const PROJECT_CARD_PX: f32 = 380.0;
pub(crate) const EXPERIENCE_ITEM_PX: f32 = 280.0;
pub(crate) const EXPERIENCE_DETAIL_LINE_PX: f32 = 26.0;
pub(crate) const ABOUT_BASE_PX: f32 = 240.0;
pub(crate) const ABOUT_PARAGRAPH_PX: f32 = 90.0;
pub(crate) const SKILL_GROUP_BASE_PX: f32 = 72.0;
pub(crate) const SKILL_ROW_PX: f32 = 40.0;
pub(crate) const CONTACT_HEIGHT_PX: f32 = 820.0;

/// Width breakpoints for the project grid and the mobile menu.
pub(crate) const TWO_COLUMN_MIN_WIDTH_PX: f32 = 760.0;
pub(crate) const THREE_COLUMN_MIN_WIDTH_PX: f32 = 1100.0;
pub(crate) const MOBILE_MENU_MAX_WIDTH_PX: f32 = 760.0;

pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));
