// SPDX-License-Identifier: MPL-2.0
use arrow_spinner::app::{self, Flags};
use arrow_spinner::config::paths;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
arrow_spinner

USAGE:
  arrow_spinner [OPTIONS]

OPTIONS:
  --config <FILE>       Read settings from FILE instead of the config directory
  --config-dir <DIR>    Directory containing settings.toml
  -h, --help            Print this help

ENVIRONMENT:
  ARROW_SPINNER_CONFIG_DIR   Config directory when --config-dir is absent
  RUST_LOG                   Log filter (default: info)
";

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_path: Option<String> =
        args.opt_value_from_str("--config").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring --config");
            None
        });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring --config-dir");
            None
        });

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    paths::init_cli_override(config_dir);
    app::run(Flags { config_path })
}
