use super::messages::{ContactField, Message};
use super::state::{
    App, ContactPhase, MOBILE_MENU_MAX_WIDTH_PX, NAV_BAR_HEIGHT_PX, PAGE_SCROLL_ID,
    PROGRESS_BAR_HEIGHT_PX,
};
use crate::content::{Experience, PortfolioContent, Project, SkillGroup};
use crate::sections::{ALL_SECTIONS, SectionId};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, Row, TextInput, button, column, container, horizontal_space, progress_bar, row,
    scrollable, stack, text, text_input,
};
use iced::{Element, Length, Padding, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let progress = progress_bar(0.0..=1.0, self.progress.value())
            .height(Length::Fixed(PROGRESS_BAR_HEIGHT_PX));

        let mut page: Column<'_, Message> = column![progress, self.navbar()];
        if self.nav.menu_open && self.is_mobile_width() {
            page = page.push(self.mobile_menu());
        }
        page = page.push(self.page_scrollable());

        let mut layers = stack![container(page).width(Length::Fill).height(Length::Fill)];
        if self.scroll_top_is_visible() {
            layers = layers.push(
                container(
                    button(text("↑ Top").size(14))
                        .style(button::secondary)
                        .padding(12)
                        .on_press(Message::ScrollToTop),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Bottom)
                .padding(24),
            );
        }

        layers.into()
    }

    fn is_mobile_width(&self) -> bool {
        self.viewport.viewport_width > 0.0
            && self.viewport.viewport_width < MOBILE_MENU_MAX_WIDTH_PX
    }

    fn brand(&self) -> String {
        match &self.content {
            Some(content) => content
                .profile
                .name
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .collect::<String>()
                .to_uppercase(),
            None => "PORTFOLIO".to_string(),
        }
    }

    fn navbar(&self) -> Element<'_, Message> {
        let mut bar: Row<'_, Message> = row![text(self.brand()).size(20)]
            .spacing(12)
            .align_y(Vertical::Center)
            .padding(Padding::from([0.0, 16.0]));
        bar = bar.push(horizontal_space());

        if self.is_mobile_width() {
            let label = if self.nav.menu_open { "✕" } else { "☰" };
            bar = bar.push(
                button(text(label))
                    .style(button::text)
                    .on_press(Message::ToggleMenu),
            );
        } else {
            for section in ALL_SECTIONS {
                bar = bar.push(self.nav_entry(section));
            }
        }

        let theme_label = if matches!(self.config.theme, crate::config::ThemeMode::Night) {
            "Day"
        } else {
            "Night"
        };
        bar = bar.push(
            button(text(theme_label).size(14))
                .style(button::text)
                .on_press(Message::ToggleTheme),
        );

        let solid = self.navbar_solid;
        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(NAV_BAR_HEIGHT_PX))
            .align_y(Vertical::Center)
            .style(move |theme: &Theme| {
                let palette = theme.extended_palette();
                let background = if solid {
                    Some(palette.background.weak.color.into())
                } else {
                    None
                };
                iced::widget::container::Style {
                    background,
                    ..iced::widget::container::Style::default()
                }
            })
            .into()
    }

    fn nav_entry(&self, section: SectionId) -> Element<'_, Message> {
        let style: fn(&Theme, button::Status) -> button::Style = if self.nav.active == section {
            button::primary
        } else {
            button::text
        };
        button(text(section.label()).size(14))
            .style(style)
            .on_press(Message::SectionActivated(section))
            .into()
    }

    fn mobile_menu(&self) -> Element<'_, Message> {
        let mut menu: Column<'_, Message> = column![].spacing(4).padding(12);
        for section in ALL_SECTIONS {
            menu = menu.push(self.nav_entry(section));
        }
        container(menu).width(Length::Fill).into()
    }

    fn page_scrollable(&self) -> Element<'_, Message> {
        let mut body: Column<'_, Message> = column![self.hero()];

        match &self.content {
            Some(content) => {
                body = body
                    .push(self.revealed(SectionId::Projects, self.projects_section(content)))
                    .push(self.revealed(SectionId::Experience, self.experience_section(content)))
                    .push(self.revealed(SectionId::About, self.about_section(content)))
                    .push(self.revealed(SectionId::Skills, self.skills_section(content)))
                    .push(self.revealed(SectionId::Contact, self.contact_section(content)))
                    .push(self.footer(content));
            }
            None if self.content_loading => {
                body = body.push(
                    container(text("Loading portfolio…").size(18))
                        .width(Length::Fill)
                        .center_x(Length::Fill)
                        .padding(80),
                );
            }
            None => {
                let error = self
                    .content_error
                    .as_deref()
                    .unwrap_or("Portfolio content is unavailable");
                body = body.push(
                    container(
                        column![
                            text(format!("Could not load content: {error}")).size(16),
                            button(text("Retry").size(14))
                                .style(button::secondary)
                                .on_press(Message::RetryContentLoad),
                        ]
                        .spacing(16)
                        .align_x(Horizontal::Center),
                    )
                    .width(Length::Fill)
                    .center_x(Length::Fill)
                    .padding(80),
                );
            }
        }

        scrollable(body.width(Length::Fill))
            .on_scroll(|viewport| Message::Scrolled {
                offset: viewport.absolute_offset(),
                viewport_width: viewport.bounds().width,
                viewport_height: viewport.bounds().height,
                content_width: viewport.content_bounds().width,
                content_height: viewport.content_bounds().height,
            })
            .id(PAGE_SCROLL_ID.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Wrap a deferred section with its one-time slide-in. The latch
    /// decides whether the section sits at its resting position; the
    /// remaining slide distance decays under the enter animation.
    fn revealed<'a>(
        &self,
        section: SectionId,
        inner: Element<'a, Message>,
    ) -> Element<'a, Message> {
        let progress = if self.config.animations {
            self.reveal
                .progress(section, self.now, self.reveal_duration())
        } else if self.reveal.is_revealed(section) {
            1.0
        } else {
            0.0
        };
        let slide = (1.0 - progress) * self.config.reveal_slide_px;
        container(inner)
            .width(Length::Fill)
            .padding(Padding {
                top: slide,
                ..Padding::ZERO
            })
            .into()
    }

    fn section_header<'a>(&self, title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
        column![
            text(title).size(36),
            text(subtitle).size(16),
        ]
        .spacing(8)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(Padding {
            top: 64.0,
            bottom: 40.0,
            ..Padding::ZERO
        })
        .into()
    }

    fn hero(&self) -> Element<'_, Message> {
        let height = self
            .viewport
            .viewport_height
            .max(super::state::HERO_MIN_HEIGHT_PX);

        let inner: Element<'_, Message> = match &self.content {
            Some(content) => column![
                text(&content.profile.name).size(56),
                text(&content.profile.title).size(26),
                text(&content.profile.tagline).size(16),
                button(text("Scroll to explore ↓").size(14))
                    .style(button::text)
                    .on_press(Message::SectionActivated(SectionId::Projects)),
            ]
            .spacing(16)
            .align_x(Horizontal::Center)
            .into(),
            None => column![text("").size(56)].into(),
        };

        container(inner)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }

    fn projects_section<'a>(&self, content: &'a PortfolioContent) -> Element<'a, Message> {
        let mut grid: Column<'a, Message> = column![].spacing(24).padding(Padding::from([0.0, 32.0]));
        let columns = self.project_grid_columns();
        for chunk in content.projects.chunks(columns.max(1)) {
            let mut line: Row<'a, Message> = row![].spacing(24);
            for project in chunk {
                line = line.push(self.project_card(project));
            }
            grid = grid.push(line);
        }

        column![
            self.section_header("Projects", "A universe of things I have built"),
            grid,
        ]
        .width(Length::Fill)
        .padding(Padding {
            bottom: 40.0,
            ..Padding::ZERO
        })
        .into()
    }

    fn project_card<'a>(&self, project: &'a Project) -> Element<'a, Message> {
        let mut card: Column<'a, Message> = column![].spacing(10).padding(20);
        let title = if project.featured {
            format!("★ {}", project.title)
        } else {
            project.title.clone()
        };
        card = card.push(text(title).size(20));
        if !project.description.is_empty() {
            card = card.push(text(&project.description).size(14));
        }
        if !project.stack.is_empty() {
            card = card.push(text(project.stack.join(" · ")).size(12));
        }
        let mut links: Row<'a, Message> = row![].spacing(12);
        if let Some(link) = &project.link {
            links = links.push(text(format!("Code: {link}")).size(12));
        }
        if let Some(live) = &project.live_link {
            links = links.push(text(format!("Live: {live}")).size(12));
        }
        card = card.push(links);

        container(card)
            .width(Length::FillPortion(1))
            .style(container::rounded_box)
            .into()
    }

    fn experience_section<'a>(&self, content: &'a PortfolioContent) -> Element<'a, Message> {
        let mut timeline: Column<'a, Message> =
            column![].spacing(24).padding(Padding::from([0.0, 48.0]));
        for experience in &content.experience {
            timeline = timeline.push(self.experience_card(experience));
        }

        column![
            self.section_header("Experience", "Where the journey has led so far"),
            timeline,
        ]
        .width(Length::Fill)
        .padding(Padding {
            bottom: 40.0,
            ..Padding::ZERO
        })
        .into()
    }

    fn experience_card<'a>(&self, experience: &'a Experience) -> Element<'a, Message> {
        let expanded = self.expanded_experience.contains(&experience.id);
        let mut card: Column<'a, Message> = column![
            row![
                column![
                    text(&experience.position).size(20),
                    text(&experience.company).size(16),
                ]
                .spacing(4),
                horizontal_space(),
                column![
                    text(&experience.duration).size(13),
                    text(&experience.location).size(13),
                ]
                .spacing(4)
                .align_x(Horizontal::Right),
            ]
            .align_y(Vertical::Top),
        ]
        .spacing(10)
        .padding(20);

        if !experience.kind.is_empty() {
            card = card.push(text(&experience.kind).size(12));
        }
        if !experience.description.is_empty() {
            card = card.push(text(&experience.description).size(14));
        }

        let toggle_label = if expanded { "Show Less ▲" } else { "Show More ▼" };
        card = card.push(
            button(text(toggle_label).size(13))
                .style(button::text)
                .on_press(Message::ToggleExperience(experience.id.clone())),
        );

        if expanded {
            if !experience.responsibilities.is_empty() {
                card = card.push(text("Responsibilities").size(14));
                for item in &experience.responsibilities {
                    card = card.push(text(format!("• {item}")).size(13));
                }
            }
            if !experience.achievements.is_empty() {
                card = card.push(text("Achievements").size(14));
                for item in &experience.achievements {
                    card = card.push(text(format!("• {item}")).size(13));
                }
            }
            if !experience.technologies.is_empty() {
                card = card.push(text(experience.technologies.join(" · ")).size(12));
            }
        }

        container(card)
            .width(Length::Fill)
            .style(container::rounded_box)
            .into()
    }

    fn about_section<'a>(&self, content: &'a PortfolioContent) -> Element<'a, Message> {
        let mut body: Column<'a, Message> = column![].spacing(16).padding(Padding::from([0.0, 64.0]));
        for paragraph in &content.profile.bio {
            body = body.push(text(paragraph).size(15));
        }
        if !content.profile.availability.is_empty() {
            body = body.push(text(&content.profile.availability).size(14));
        }

        column![self.section_header("About", "The person behind the pixels"), body]
            .width(Length::Fill)
            .padding(Padding {
                bottom: 40.0,
                ..Padding::ZERO
            })
            .into()
    }

    fn skills_section<'a>(&self, content: &'a PortfolioContent) -> Element<'a, Message> {
        let mut groups: Column<'a, Message> = column![].spacing(24).padding(Padding::from([0.0, 64.0]));
        for group in &content.skill_groups {
            groups = groups.push(self.skill_group(group));
        }

        column![
            self.section_header("Skills", "Tools I reach for every day"),
            groups,
        ]
        .width(Length::Fill)
        .padding(Padding {
            bottom: 40.0,
            ..Padding::ZERO
        })
        .into()
    }

    fn skill_group<'a>(&self, group: &'a SkillGroup) -> Element<'a, Message> {
        let mut body: Column<'a, Message> = column![text(&group.name).size(18)].spacing(8);
        for skill in &group.skills {
            body = body.push(
                row![
                    text(&skill.name).size(14).width(Length::Fixed(180.0)),
                    progress_bar(0.0..=100.0, f32::from(skill.level))
                        .height(Length::Fixed(8.0)),
                ]
                .spacing(12)
                .align_y(Vertical::Center),
            );
        }
        body.into()
    }

    fn contact_section<'a>(&'a self, content: &'a PortfolioContent) -> Element<'a, Message> {
        let form = self.contact_form();

        let mut aside: Column<'a, Message> = column![text("Get In Touch").size(20)].spacing(10);
        if !content.profile.email.is_empty() {
            aside = aside.push(text(&content.profile.email).size(14));
        }
        if !content.profile.availability.is_empty() {
            aside = aside.push(text(&content.profile.availability).size(14));
        }
        for social in &content.social_links {
            aside = aside.push(text(format!("{}: {}", social.name, social.url)).size(13));
        }

        column![
            self.section_header("Let's Connect", "Ready to launch your next project?"),
            row![
                container(form).width(Length::FillPortion(1)),
                container(aside).width(Length::FillPortion(1)),
            ]
            .spacing(48)
            .padding(Padding::from([0.0, 64.0])),
        ]
        .width(Length::Fill)
        .padding(Padding {
            bottom: 40.0,
            ..Padding::ZERO
        })
        .into()
    }

    fn contact_form(&self) -> Element<'_, Message> {
        let submitting = self.contact.is_submitting();

        let status: Element<'_, Message> = match &self.contact.phase {
            ContactPhase::Idle => text("").size(13).into(),
            ContactPhase::Submitting => text("Launching…").size(13).into(),
            ContactPhase::Sent { .. } => text("Message sent! I'll get back to you soon.")
                .size(13)
                .into(),
            ContactPhase::Failed { error, .. } => {
                text(format!("Sending failed: {error}. Please try again."))
                    .size(13)
                    .into()
            }
        };

        let submit_label = if submitting { "Sending…" } else { "Send Message" };
        let mut submit = button(text(submit_label).size(15)).style(button::primary);
        if !submitting && self.contact.fields_complete() {
            submit = submit.on_press(Message::SubmitContact);
        }

        column![
            text("Send a Message").size(20),
            contact_input("Your Name", &self.contact.name, ContactField::Name),
            contact_input("Your Email", &self.contact.email, ContactField::Email),
            contact_input("Your Phone (Optional)", &self.contact.phone, ContactField::Phone),
            contact_input("Your Message", &self.contact.message, ContactField::MessageBody),
            submit,
            status,
        ]
        .spacing(12)
        .into()
    }

    fn footer<'a>(&self, content: &'a PortfolioContent) -> Element<'a, Message> {
        container(
            text(format!(
                "© {} · built with Rust, iced, and plenty of coffee",
                content.profile.name
            ))
            .size(13),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(32)
        .into()
    }
}

fn contact_input<'a>(
    placeholder: &'a str,
    value: &'a str,
    kind: ContactField,
) -> TextInput<'a, Message> {
    text_input(placeholder, value)
        .on_input(move |value| Message::ContactFieldChanged(kind, value))
        .padding(10)
}
