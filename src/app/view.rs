// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module derives what is shown purely from the application state: the
//! active screen, the directory status, and whether a region has been
//! selected. It holds no state of its own.

use super::{Message, Screen};
use crate::directory::{DirectoryStatus, Region};
use crate::i18n::I18n;
use crate::ui::design_tokens::typography;
use crate::ui::home;
use crate::ui::map_view;
use crate::ui::navbar;
use crate::ui::picker;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub directory: &'a DirectoryStatus,
    pub selection: Option<&'a Region>,
    pub map: &'a map_view::State,
}

/// Which surface the map screen shows for a given state. Once a region is
/// selected the picker is never chosen again, regardless of directory status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MapSurface {
    Map,
    Loading,
    Picker,
}

fn map_surface(selection: Option<&Region>, directory: &DirectoryStatus) -> MapSurface {
    if selection.is_some() {
        MapSurface::Map
    } else if matches!(directory, DirectoryStatus::Loading) {
        MapSurface::Loading
    } else {
        MapSurface::Picker
    }
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(home::ViewContext { i18n: ctx.i18n }).map(Message::Home),
        Screen::Map => view_map_screen(&ctx),
    };

    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        active: match ctx.screen {
            Screen::Home => navbar::Item::Home,
            Screen::Map => navbar::Item::Map,
        },
    })
    .map(Message::Navbar);

    Column::new()
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(navbar_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_map_screen<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match map_surface(ctx.selection, ctx.directory) {
        MapSurface::Map => {
            // map_surface only returns Map when a selection exists
            let region = ctx.selection.expect("map surface requires a selection");
            map_view::view(map_view::ViewContext {
                i18n: ctx.i18n,
                state: ctx.map,
                region,
            })
            .map(Message::Map)
        }
        MapSurface::Loading => view_loading(ctx.i18n),
        MapSurface::Picker => picker::view(picker::ViewContext {
            i18n: ctx.i18n,
            status: ctx.directory,
        })
        .map(Message::Picker),
    }
}

fn view_loading(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("map-loading")).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
