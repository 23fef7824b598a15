// SPDX-License-Identifier: MPL-2.0
//! Map screen shown once a region has been selected.
//!
//! The map surface itself is a placeholder; this component owns the state
//! that surrounds it: the side data panel, the bottom timeline panel, and
//! the bounded year slider. The two panels toggle independently of each
//! other and of everything else.

pub mod timeline;

pub use timeline::Timeline;

use crate::directory::Region;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, slider, Column, Container, Row, Text},
    Element, Length,
};

/// State for the map screen.
#[derive(Debug, Clone, Default)]
pub struct State {
    side_panel_open: bool,
    bottom_panel_open: bool,
    timeline: Timeline,
}

impl State {
    /// Creates the map state with both panels closed and the given timeline.
    pub fn new(timeline: Timeline) -> Self {
        Self {
            side_panel_open: false,
            bottom_panel_open: false,
            timeline,
        }
    }

    pub fn side_panel_open(&self) -> bool {
        self.side_panel_open
    }

    pub fn bottom_panel_open(&self) -> bool {
        self.bottom_panel_open
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

/// Messages emitted by the map screen.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleSidePanel,
    ToggleBottomPanel,
    YearSelected(i32),
}

/// Process a map screen message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::ToggleSidePanel => state.side_panel_open = !state.side_panel_open,
        Message::ToggleBottomPanel => state.bottom_panel_open = !state.bottom_panel_open,
        Message::YearSelected(year) => state.timeline.set(year),
    }
}

/// Contextual data needed to render the map screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub region: &'a Region,
}

/// Render the map screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let controls = build_controls(&ctx);
    let surface = build_map_surface(&ctx);
    let bottom_panel = build_bottom_panel(&ctx);

    let mut main = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(controls)
        .push(surface)
        .push(bottom_panel);

    if ctx.state.side_panel_open {
        let side_panel = build_side_panel(&ctx);
        main = Column::new().width(Length::Fill).height(Length::Fill).push(
            Row::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(side_panel)
                .push(main),
        );
    }

    main.into()
}

/// Top controls row with the side panel toggle.
fn build_controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = ctx.i18n.tr("map-toggle-data-panel");
    let toggle = button(Text::new(label).size(typography::BODY))
        .on_press(Message::ToggleSidePanel)
        .padding([spacing::XXS, spacing::SM]);

    let toggle = if ctx.state.side_panel_open {
        toggle.style(styles::button::selected)
    } else {
        toggle.style(styles::button::unselected)
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(toggle);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

/// Placeholder for the map tiles, labelled with the selected region.
fn build_map_surface<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let caption = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new("×").size(96.0))
        .push(Text::new(ctx.i18n.tr("map-placeholder")).size(typography::BODY_SM))
        .push(Text::new(ctx.region.name.clone()).size(typography::TITLE_SM));

    Container::new(caption)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::map_surface)
        .into()
}

/// Side data panel listing the active data set for the selected region.
fn build_side_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let close = button(Text::new("‹").size(typography::TITLE_SM))
        .on_press(Message::ToggleSidePanel)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::unselected);

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(ctx.i18n.tr("map-side-panel-title")).size(typography::TITLE_MD))
                .width(Length::Fill),
        )
        .push(close);

    let active_card = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(ctx.i18n.tr("map-side-panel-active")).size(typography::BODY))
            .push(
                Text::new(format!(
                    "{}: {}",
                    ctx.i18n.tr("map-side-panel-region"),
                    ctx.region.name
                ))
                .size(typography::BODY_SM),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::card);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(header)
        .push(Text::new(ctx.i18n.tr("map-side-panel-single")).size(typography::BODY_SM))
        .push(active_card);

    Container::new(content)
        .width(sizing::SIDE_PANEL_WIDTH)
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

/// Bottom timeline panel: a collapse toggle and, when open, the year slider
/// framed by its bounds.
fn build_bottom_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let timeline = ctx.state.timeline();
    let glyph = if ctx.state.bottom_panel_open {
        "⌄"
    } else {
        "⌃"
    };

    let toggle = button(Text::new(glyph).size(typography::TITLE_SM))
        .on_press(Message::ToggleBottomPanel)
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::unselected);

    let mut panel = Column::new()
        .align_x(Horizontal::Center)
        .padding(spacing::XS)
        .spacing(spacing::XS)
        .push(toggle);

    if ctx.state.bottom_panel_open {
        let year_label = format!(
            "{}: {}",
            ctx.i18n.tr("map-timeline-year"),
            timeline.value()
        );

        let slider_row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(timeline.min().to_string()).size(typography::CAPTION))
            .push(
                slider(
                    timeline.min()..=timeline.max(),
                    timeline.value(),
                    Message::YearSelected,
                )
                .step(1),
            )
            .push(Text::new(timeline.max().to_string()).size(typography::CAPTION));

        panel = panel
            .push(Text::new(year_label).size(typography::BODY_SM))
            .push(slider_row);
    }

    Container::new(panel)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
