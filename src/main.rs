// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, Flags};
use std::ffi::OsString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Usage: iced_carousel [OPTIONS] [IMAGE]...

Arguments:
  [IMAGE]...              Image URLs or paths replacing the configured list

Options:
  --config-dir <PATH>     Directory holding settings.toml
  --target <ID>           Mount slot to render into
  -h, --help              Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iced_carousel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let target: Option<String> = args.opt_value_from_str("--target")?;
    let images = args
        .finish()
        .into_iter()
        .filter_map(|arg: OsString| arg.into_string().ok())
        .collect();

    Ok(Flags {
        config_dir,
        target,
        images,
    })
}
