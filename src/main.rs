// SPDX-License-Identifier: MPL-2.0
use iced_toaster::app::{self, Flags};

const USAGE: &str = "\
Usage: iced_toaster [OPTIONS]

Options:
  --position <ANCHOR>   top-left, top-center, top-right,
                        bottom-left, bottom-center or bottom-right
  --max-toasts <N>      number of toasts visible at once
  --config-dir <PATH>   directory holding toaster.toml
  -h, --help            print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        position: args.opt_value_from_str("--position")?,
        max_toasts: args.opt_value_from_str("--max-toasts")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    iced_toaster::logging::init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{USAGE}");
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    }
}
