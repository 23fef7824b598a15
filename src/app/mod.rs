// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the region directory, the selection, and
//! the map screen, and translates messages into side effects like the
//! startup fetch. Policy decisions (fetch-once, select-once, window sizing)
//! stay close to the main update loop so user-facing behavior is easy to
//! audit.

mod message;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::directory::{self, DirectoryStatus, Region};
use crate::i18n::I18n;
use crate::ui::map_view::{self, Timeline};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state bridging the directory client, the selection,
/// and the UI components.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    directory: DirectoryStatus,
    selection: Option<Region>,
    map: map_view::State,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("directory_settled", &self.directory.is_settled())
            .field("has_selection", &self.selection.is_some())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            directory: DirectoryStatus::Loading,
            selection: None,
            map: map_view::State::default(),
            theme_mode: ThemeMode::System,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state and kicks off the one-shot region fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let endpoint = flags
            .api_url
            .unwrap_or_else(|| config.endpoint().to_string());

        let timeline = Timeline::new(
            config
                .timeline_min_year
                .unwrap_or(config::DEFAULT_TIMELINE_MIN_YEAR),
            config
                .timeline_max_year
                .unwrap_or(config::DEFAULT_TIMELINE_MAX_YEAR),
            config
                .timeline_default_year
                .unwrap_or(config::DEFAULT_TIMELINE_YEAR),
        );

        let app = App {
            i18n,
            theme_mode: config.theme,
            map: map_view::State::new(timeline),
            ..Self::default()
        };

        let fetch = Task::perform(directory::fetch_regions(endpoint), Message::RegionsLoaded);

        (app, fetch)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            directory: &self.directory,
            selection: self.selection.as_ref(),
            map: &self.map,
        })
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    /// Records the chosen region. The first selection wins; later calls are
    /// ignored so the map view keeps receiving the original value.
    fn select(&mut self, region: Region) {
        if self.selection.is_none() {
            self.selection = Some(region);
        }
    }
}
