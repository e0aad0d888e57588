//! The fixed, ordered set of page sections.
//!
//! Section identifiers are the contract between navigation and layout:
//! the navigation bar, the viewport observer, and the reveal controller
//! all key off `SectionId`, and `SectionId::ALL` fixes the document
//! order used for active-section resolution.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Projects,
    Experience,
    About,
    Skills,
    Contact,
}

/// Document order. Active-section ties resolve to the earliest entry.
pub const ALL_SECTIONS: [SectionId; 6] = [
    SectionId::Home,
    SectionId::Projects,
    SectionId::Experience,
    SectionId::About,
    SectionId::Skills,
    SectionId::Contact,
];

impl SectionId {
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    /// Sections that only exist once the deferred content has loaded.
    /// The hero is always mounted.
    pub fn is_deferred(self) -> bool {
        !matches!(self, SectionId::Home)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
