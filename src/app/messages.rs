use crate::content::PortfolioContent;
use iced::keyboard::{Key, Modifiers};
use iced::widget::scrollable::AbsoluteOffset;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    /// A navigation entry was clicked.
    SectionActivated(crate::sections::SectionId),
    ToggleMenu,
    ToggleTheme,
    ScrollToTop,
    ToggleExperience(String),
    ContactFieldChanged(ContactField, String),
    SubmitContact,
    ContactDispatched {
        error: Option<String>,
    },
    ContentLoaded {
        content: Box<PortfolioContent>,
    },
    ContentLoadFailed {
        error: String,
    },
    RetryContentLoad,
    Scrolled {
        offset: AbsoluteOffset,
        viewport_width: f32,
        viewport_height: f32,
        content_width: f32,
        content_height: f32,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    WindowMoved {
        x: f32,
        y: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Tick(Instant),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    MessageBody,
}
