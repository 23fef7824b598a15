// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::ui::home;
use crate::ui::map_view;
use crate::ui::navbar;
use crate::ui::picker;
use iced::Task;

/// Applies a top-level message to the application state.
///
/// All mutations happen here, in reaction to discrete user or I/O-completion
/// messages delivered by the Iced runtime, so none of them can interleave.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::RegionsLoaded(outcome) => {
            app.directory.settle(outcome);
            Task::none()
        }
        Message::Picker(picker::Message::Pick(region)) => {
            app.select(region);
            Task::none()
        }
        Message::Map(msg) => {
            map_view::update(&mut app.map, msg);
            Task::none()
        }
        Message::Home(msg) => match home::update(msg) {
            home::Event::OpenMap => {
                app.screen = Screen::Map;
                Task::none()
            }
        },
        Message::Navbar(msg) => match navbar::update(msg) {
            navbar::Event::GoHome => {
                app.screen = Screen::Home;
                Task::none()
            }
            navbar::Event::GoMap => {
                app.screen = Screen::Map;
                Task::none()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{DirectoryStatus, Region};
    use crate::error::{DirectoryError, Error};

    fn region(id: &str, name: &str) -> Region {
        Region {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn loaded_app(regions: Vec<Region>) -> App {
        let mut app = App::default();
        let _ = update(&mut app, Message::RegionsLoaded(Ok(regions)));
        app
    }

    #[test]
    fn fetch_success_settles_directory() {
        let app = loaded_app(vec![region("a", "Alpha")]);
        assert_eq!(
            app.directory,
            DirectoryStatus::Ready(vec![region("a", "Alpha")])
        );
    }

    #[test]
    fn fetch_failure_settles_directory_with_error() {
        let mut app = App::default();
        let _ = update(
            &mut app,
            Message::RegionsLoaded(Err(Error::Directory(DirectoryError::Status(500)))),
        );
        assert_eq!(
            app.directory,
            DirectoryStatus::Error(DirectoryError::Status(500))
        );
    }

    #[test]
    fn late_fetch_result_cannot_overwrite_settled_status() {
        let mut app = loaded_app(vec![region("a", "Alpha")]);
        let _ = update(
            &mut app,
            Message::RegionsLoaded(Err(Error::Directory(DirectoryError::Status(500)))),
        );
        assert_eq!(
            app.directory,
            DirectoryStatus::Ready(vec![region("a", "Alpha")])
        );
    }

    #[test]
    fn picking_a_region_sets_the_selection() {
        let mut app = loaded_app(vec![region("a", "Alpha")]);
        let _ = update(
            &mut app,
            Message::Picker(picker::Message::Pick(region("a", "Alpha"))),
        );
        assert_eq!(app.selection, Some(region("a", "Alpha")));
    }

    #[test]
    fn first_selection_wins() {
        let mut app = loaded_app(vec![region("a", "Alpha"), region("b", "Beta")]);
        let _ = update(
            &mut app,
            Message::Picker(picker::Message::Pick(region("a", "Alpha"))),
        );
        let _ = update(
            &mut app,
            Message::Picker(picker::Message::Pick(region("b", "Beta"))),
        );
        assert_eq!(app.selection, Some(region("a", "Alpha")));
    }

    #[test]
    fn map_messages_reach_the_map_state() {
        let mut app = App::default();
        let _ = update(&mut app, Message::Map(map_view::Message::ToggleSidePanel));
        assert!(app.map.side_panel_open());

        let _ = update(&mut app, Message::Map(map_view::Message::YearSelected(1999)));
        assert_eq!(app.map.timeline().value(), 2005);
    }

    #[test]
    fn panel_toggles_work_while_fetch_is_outstanding() {
        // The interface stays operable while the directory is still loading.
        let mut app = App::default();
        assert_eq!(app.directory, DirectoryStatus::Loading);

        let _ = update(&mut app, Message::Map(map_view::Message::ToggleBottomPanel));
        assert!(app.map.bottom_panel_open());
        assert_eq!(app.directory, DirectoryStatus::Loading);
    }

    #[test]
    fn navbar_events_switch_screens() {
        let mut app = App::default();
        assert_eq!(app.screen, Screen::Home);

        let _ = update(&mut app, Message::Navbar(navbar::Message::GoMap));
        assert_eq!(app.screen, Screen::Map);

        let _ = update(&mut app, Message::Navbar(navbar::Message::GoHome));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn home_open_map_switches_screens() {
        let mut app = App::default();
        let _ = update(&mut app, Message::Home(home::Message::OpenMap));
        assert_eq!(app.screen, Screen::Map);
    }

    #[test]
    fn screen_switching_does_not_touch_selection_or_panels() {
        let mut app = loaded_app(vec![region("a", "Alpha")]);
        let _ = update(
            &mut app,
            Message::Picker(picker::Message::Pick(region("a", "Alpha"))),
        );
        let _ = update(&mut app, Message::Map(map_view::Message::ToggleSidePanel));

        let _ = update(&mut app, Message::Navbar(navbar::Message::GoHome));
        let _ = update(&mut app, Message::Navbar(navbar::Message::GoMap));

        assert_eq!(app.selection, Some(region("a", "Alpha")));
        assert!(app.map.side_panel_open());
    }
}
