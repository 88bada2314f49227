// SPDX-License-Identifier: MPL-2.0
use dob_picker::app::{self, Flags};
use dob_picker::domain::ReferenceDate;
use std::process::ExitCode;

const HELP: &str = "\
dob-picker

USAGE:
  dob_picker [OPTIONS]

OPTIONS:
  --lang <ID>           Interface language (e.g. en-US, fr, vi)
  --config-dir <DIR>    Directory holding settings.toml
  --i18n-dir <DIR>      Directory with extra Fluent .ftl files
  --today <YYYY-MM-DD>  Date used in place of the local date
  --verbose             Print diagnostic events and list them in the window
  -h, --help            Print this help
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        today: args.opt_value_from_fn("--today", ReferenceDate::parse)?,
        verbose: args.contains("--verbose"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Ignoring unexpected arguments: {:?}", rest);
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("Run with --help for usage.");
            return ExitCode::FAILURE;
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
