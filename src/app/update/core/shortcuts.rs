use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        // Never swallow keystrokes meant for the contact inputs; the
        // captured-event filter upstream handles focused widgets, this
        // is a second guard for plain letter shortcuts.
        if self.contact_input_focus_likely() && modifiers.is_empty() {
            return None;
        }

        if Self::shortcut_matches(&self.config.key_toggle_theme, "t", &pressed, modifiers) {
            Some(Message::ToggleTheme)
        } else if Self::shortcut_matches(&self.config.key_toggle_menu, "m", &pressed, modifiers) {
            Some(Message::ToggleMenu)
        } else if Self::shortcut_matches(&self.config.key_scroll_top, "g", &pressed, modifiers) {
            Some(Message::ScrollToTop)
        } else if Self::shortcut_matches(&self.config.key_quit, "q", &pressed, modifiers) {
            Some(Message::Quit)
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized.replace("spacebar", "space")
        }
    }

    /// Heuristic: while the visitor is mid-form, unmodified letters are
    /// almost certainly text entry.
    fn contact_input_focus_likely(&self) -> bool {
        self.contact.is_submitting()
            || !self.contact.name.is_empty()
            || !self.contact.email.is_empty()
            || !self.contact.phone.is_empty()
            || !self.contact.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    #[test]
    fn normalizes_spacebar_alias() {
        assert_eq!(App::normalize_shortcut_token(" SpaceBar ", "x"), "space");
    }

    #[test]
    fn matches_plain_letter_shortcut() {
        assert!(App::shortcut_matches("t", "x", "t", Modifiers::empty()));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "t",
            "x",
            "t",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }

    #[test]
    fn modifier_chords_require_every_token() {
        assert!(App::shortcut_matches("ctrl+g", "x", "g", Modifiers::CTRL));
        assert!(!App::shortcut_matches("ctrl+g", "x", "g", Modifiers::empty()));
    }
}
