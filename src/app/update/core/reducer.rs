use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::SectionActivated(section) => {
                self.handle_section_activated(section, &mut effects)
            }
            Message::ToggleMenu => self.handle_toggle_menu(),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::ScrollToTop => self.handle_scroll_to_top(&mut effects),
            Message::ToggleExperience(id) => self.handle_toggle_experience(id),
            Message::ContactFieldChanged(field, value) => {
                self.handle_contact_field_changed(field, value)
            }
            Message::SubmitContact => self.handle_submit_contact(&mut effects),
            Message::ContactDispatched { error } => self.handle_contact_dispatched(error),
            Message::ContentLoaded { content } => self.apply_loaded_content(*content),
            Message::ContentLoadFailed { error } => self.apply_content_failure(error),
            Message::RetryContentLoad => {
                effects.push(Effect::LoadContent(self.content_path.clone()))
            }
            Message::Scrolled {
                offset,
                viewport_width,
                viewport_height,
                content_width: _,
                content_height,
            } => self.handle_scrolled(offset, viewport_width, viewport_height, content_height),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects)
            }
            Message::WindowMoved { x, y } => self.handle_window_moved(x, y, &mut effects),
            Message::KeyPressed { key, modifiers } => {
                if let Some(message) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(message));
                }
            }
            Message::Tick(now) => self.handle_tick(now, &mut effects),
            Message::Quit => effects.push(Effect::Quit),
        }

        effects
    }
}
