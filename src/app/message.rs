// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::directory::Region;
use crate::error::Error;
use crate::ui::home;
use crate::ui::map_view;
use crate::ui::navbar;
use crate::ui::picker;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Navbar(navbar::Message),
    Picker(picker::Message),
    Map(map_view::Message),
    /// Result of the one-shot region directory fetch issued at startup.
    RegionsLoaded(Result<Vec<Region>, Error>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional region listing endpoint override.
    /// Takes precedence over the `api_url` config key.
    pub api_url: Option<String>,
}
