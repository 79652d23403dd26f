// SPDX-License-Identifier: MPL-2.0
use pico_args::Arguments;
use svj_notify::app::{self, Flags};
use tracing::Level;

const HELP: &str = "\
Usage: svj_notify [OPTIONS]

Options:
  --lang <ID>      Interface language, e.g. cs or en-US
  --config <PATH>  Settings file to use instead of the default location
  --verbose        Log dispatcher activity at debug level
  -h, --help       Print this help
";

fn main() -> iced::Result {
    let mut args = Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains("--verbose");
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --lang");
            None
        }),
        config_path: args.opt_value_from_str("--config").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --config");
            None
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}
