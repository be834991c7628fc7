// SPDX-License-Identifier: MPL-2.0
use expense_snap::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
ExpenseSnap - receipt scanner

USAGE:
  expense_snap [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --data-dir <path>    Directory for preferences and app state
                       (overrides EXPENSE_SNAP_DATA_DIR)
  --config-dir <path>  Directory containing settings.toml
                       (overrides EXPENSE_SNAP_CONFIG_DIR)
  -h, --help           Print this help

Set RUST_LOG (e.g. RUST_LOG=expense_snap=debug) to change log verbosity.
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
