//! Diagnostic logging on stderr.
//!
//! Replies own stdout, so every log record goes to stderr. Verbosity comes
//! from the repeated `-v` flag.

use anyhow::{Context, Result};
use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339_seconds;
use log::LevelFilter;
use std::io::stderr;
use std::time::SystemTime;

/// Maps the `-v` count to a level filter.
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger. Fails if a logger is already set.
pub fn init(verbosity: u8, no_color: bool) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    Dispatch::new()
        .level(level_for(verbosity))
        // keep HTTP client internals out of -vv output
        .level_for("reqwest", LevelFilter::Warn)
        .level_for("hyper_util", LevelFilter::Warn)
        .format(move |out, message, record| {
            let level = record.level();
            if no_color {
                out.finish(format_args!(
                    "[{} {level}] {message}",
                    format_rfc3339_seconds(SystemTime::now())
                ));
            } else {
                out.finish(format_args!(
                    "[{} {}] {message}",
                    format_rfc3339_seconds(SystemTime::now()),
                    colors.color(level)
                ));
            }
        })
        .chain(stderr())
        .apply()
        .context("Failed to initialize logger")
}
