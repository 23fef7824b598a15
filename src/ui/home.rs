// SPDX-License-Identifier: MPL-2.0
//! Home screen with instructions and about content.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    OpenMap,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenMap,
}

/// Process a home screen message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenMap => Event::OpenMap,
    }
}

/// Render the home screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("home-title")).size(typography::TITLE_LG);

    let instructions = build_section(
        ctx.i18n.tr("home-instructions-title"),
        vec![
            ctx.i18n.tr("home-instructions-intro"),
            ctx.i18n.tr("home-instructions-step-pick"),
            ctx.i18n.tr("home-instructions-step-panels"),
            ctx.i18n.tr("home-instructions-step-timeline"),
        ],
    );

    let version_line = format!(
        "{} {}",
        ctx.i18n.tr("home-about-version"),
        env!("CARGO_PKG_VERSION")
    );
    let about = build_section(
        ctx.i18n.tr("home-about-title"),
        vec![ctx.i18n.tr("home-about-body"), version_line],
    );

    let open_map = button(Text::new(ctx.i18n.tr("home-open-map-button")).size(typography::BODY))
        .on_press(Message::OpenMap)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(600.0)
        .align_x(Horizontal::Center)
        .push(title)
        .push(instructions)
        .push(about)
        .push(open_map);

    Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

/// Build a titled card with one paragraph per entry.
fn build_section<'a>(title: String, paragraphs: Vec<String>) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_SM));

    for paragraph in paragraphs {
        body = body.push(Text::new(paragraph).size(typography::BODY));
    }

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}
