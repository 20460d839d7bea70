use std::io::{self, Write};
use std::process::{self, ExitCode};

use anyhow::Result;
use clap::error::ErrorKind as ArgsErrorKind;
use clap::Parser;
use log::debug;

use gatekeeper::cmd::App;
use gatekeeper::logs;

fn run() -> Result<()> {
    let app = match App::try_parse() {
        Ok(app) => app,
        Err(err) => {
            err.use_stderr();
            err.print().expect("write help message to stderr");
            if matches!(
                err.kind(),
                ArgsErrorKind::DisplayHelp
                    | ArgsErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                    | ArgsErrorKind::DisplayVersion
            ) {
                return Ok(());
            }
            process::exit(3);
        }
    };

    logs::init(app.initial_log_level())?;
    let cfg = app.load_config()?;
    if app.log_level.is_none() {
        logs::set_level(&cfg.log_level)?;
    }
    debug!("Use config: {:?}", cfg);

    app.run(&cfg)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            _ = writeln!(io::stderr(), "Fatal: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
