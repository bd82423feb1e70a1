// SPDX-License-Identifier: MPL-2.0
use iced_greeting::app::{self, paths, Flags};
use iced_greeting::logging;

const HELP: &str = "\
Interactive birthday greeting

USAGE:
  iced_greeting [OPTIONS]

OPTIONS:
  --config-dir <PATH>  Directory holding settings.toml
  --data-dir <PATH>    Directory holding the media cache
  --no-audio           Do not open the audio device
  --seed <N>           Fixed seed for the confetti generator
  -v, --verbose        Log at debug level (RUST_LOG overrides)
  -h, --help           Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        no_audio: args.contains("--no-audio"),
        seed: args.opt_value_from_str("--seed")?,
        verbose: args.contains(["-v", "--verbose"]),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init(flags.verbose);
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    app::run(flags)
}
