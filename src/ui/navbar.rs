// SPDX-License-Identifier: MPL-2.0
//! Bottom navigation bar shared by both screens.
//!
//! Two entries, Home and Map, with the active one highlighted. Selecting an
//! entry is propagated to the parent application as an event; the navbar
//! itself holds no state.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Navigation entries in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Home,
    Map,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Item,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    GoHome,
    GoMap,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    GoHome,
    GoMap,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::GoHome => Event::GoHome,
        Message::GoMap => Event::GoMap,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let home_item = build_item(
        ctx.i18n.tr("navbar-home"),
        Message::GoHome,
        ctx.active == Item::Home,
    );
    let map_item = build_item(
        ctx.i18n.tr("navbar-map"),
        Message::GoMap,
        ctx.active == Item::Map,
    );

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(home_item)
        .push(map_item);

    Container::new(row)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::toolbar)
        .into()
}

/// Build a single navigation entry.
fn build_item<'a>(label: String, message: Message, active: bool) -> Element<'a, Message> {
    let entry = button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::LG]);

    if active {
        entry.style(styles::button::selected).into()
    } else {
        entry.style(styles::button::unselected).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn navbar_view_renders_with_home_active() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: Item::Home,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_map_active() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: Item::Map,
        };
        let _element = view(ctx);
    }

    #[test]
    fn messages_map_to_events() {
        assert!(matches!(update(Message::GoHome), Event::GoHome));
        assert!(matches!(update(Message::GoMap), Event::GoMap));
    }
}
