use super::super::super::messages::Message;
use super::super::super::state::{App, PAGE_SCROLL_ID};
use super::super::Effect;
use crate::config::save_config;
use crate::content::load_content;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::AbsoluteOffset;
use iced::window;
use std::path::{Path, PathBuf};

const CONFIG_PATH: &str = "conf/config.toml";

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveConfig => {
                save_config(Path::new(CONFIG_PATH), &self.config);
                Task::none()
            }
            Effect::SnapScrollTo(y) => iced::widget::scrollable::scroll_to(
                PAGE_SCROLL_ID.clone(),
                AbsoluteOffset { x: 0.0, y },
            ),
            Effect::LoadContent(path) => {
                self.content_loading = true;
                self.content_error = None;
                App::load_content_task(path)
            }
            Effect::SubmitContact(payload) => {
                let settings = self.config.relay_settings();
                Task::perform(
                    async move {
                        match crate::relay::send(&settings, &payload).await {
                            Ok(()) => Message::ContactDispatched { error: None },
                            Err(err) => Message::ContactDispatched {
                                error: Some(err.to_string()),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::Quit => {
                save_config(Path::new(CONFIG_PATH), &self.config);
                iced::exit()
            }
        }
    }

    pub(in crate::app) fn load_content_task(path: PathBuf) -> Task<Message> {
        Task::perform(
            async move {
                match load_content(&path) {
                    Ok(content) => Message::ContentLoaded {
                        content: Box::new(content),
                    },
                    Err(err) => Message::ContentLoadFailed {
                        error: err.to_string(),
                    },
                }
            },
            |message| message,
        )
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(iced::window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Window(iced::window::Event::Moved(position)) => Some(Message::WindowMoved {
            x: position.x,
            y: position.y,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
