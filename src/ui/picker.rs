// SPDX-License-Identifier: MPL-2.0
//! Region picker overlay shown until a region has been chosen.
//!
//! The picker is a pure view over the directory status: it lists the fetched
//! regions as buttons, shows the localized failure message when the fetch
//! settled in error, and shows a distinct notice when the service returned an
//! empty listing. Picking a region is forwarded to the parent as a message;
//! the picker keeps no state of its own.

use crate::directory::{DirectoryStatus, Region};
use crate::i18n::I18n;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the picker.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub status: &'a DirectoryStatus,
}

/// Messages emitted by the picker.
#[derive(Debug, Clone)]
pub enum Message {
    Pick(Region),
}

/// Render the picker overlay.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("picker-title")).size(typography::TITLE_MD);

    let body: Element<'a, Message> = match ctx.status {
        DirectoryStatus::Loading => Text::new(ctx.i18n.tr("picker-loading"))
            .size(typography::BODY)
            .into(),
        DirectoryStatus::Error(err) => ErrorDisplay::new(ErrorSeverity::Error)
            .title(ctx.i18n.tr("picker-error-title"))
            .message(ctx.i18n.tr(err.i18n_key()))
            .detail(err.to_string())
            .view(),
        DirectoryStatus::Ready(regions) if regions.is_empty() => {
            Text::new(ctx.i18n.tr("picker-empty"))
                .size(typography::BODY)
                .into()
        }
        DirectoryStatus::Ready(regions) => build_region_list(regions),
    };

    let dialog = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(body);

    let card = Container::new(dialog)
        .width(Length::Shrink)
        .max_width(sizing::PICKER_WIDTH)
        .style(styles::container::card);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::MD)
        .style(styles::container::overlay_backdrop)
        .into()
}

/// Build the scrollable list of region buttons.
fn build_region_list<'a>(regions: &'a [Region]) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::SM).width(Length::Fill);

    for region in regions {
        let entry = button(Text::new(region.name.clone()).size(typography::BODY))
            .on_press(Message::Pick(region.clone()))
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(styles::button::list_entry);
        list = list.push(entry);
    }

    Container::new(scrollable(list))
        .width(Length::Fill)
        .max_height(sizing::PICKER_LIST_HEIGHT)
        .into()
}
