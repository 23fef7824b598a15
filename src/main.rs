// SPDX-License-Identifier: MPL-2.0
use terramap::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        api_url: args.opt_value_from_str("--api-url").unwrap(),
    };

    app::run(flags)
}
