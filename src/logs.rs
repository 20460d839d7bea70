use std::io::{self, IsTerminal};
use std::time::SystemTime;

use anyhow::{bail, Context, Result};
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

pub fn parse_level(level: &str) -> Result<LevelFilter> {
    match level {
        "error" => Ok(LevelFilter::Error),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        _ => bail!("unknown log level '{}'", level),
    }
}

/// The dispatcher lets every supported level through; the effective level is
/// the global max level, which can be changed after init.
fn build_dispatch(colored: bool) -> fern::Dispatch {
    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .warn(Color::Yellow)
        .debug(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = if colored {
                colors.color(record.level()).to_string()
            } else {
                record.level().to_string()
            };
            out.finish(format_args!(
                "{} [{}] {}",
                humantime::format_rfc3339_millis(SystemTime::now()),
                level,
                message
            ))
        })
        .level(LevelFilter::Debug)
}

/// Logs go to stderr, stdout is reserved for command output.
pub fn init(level: &str) -> Result<()> {
    let level = parse_level(level)?;

    build_dispatch(io::stderr().is_terminal())
        .chain(io::stderr())
        .apply()
        .context("init logger")?;

    log::set_max_level(level);
    Ok(())
}

/// Changes the level of an already initialized logger.
pub fn set_level(level: &str) -> Result<()> {
    log::set_max_level(parse_level(level)?);
    Ok(())
}
