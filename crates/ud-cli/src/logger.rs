//! fern setup for a one-shot command.
//!
//! stdout carries the JSON result, so the terminal only sees short
//! `level: message` lines on stderr, warnings and errors by default. A
//! configured log file gets every record at the configured level with
//! timestamps and source locations.

use crate::error::{CliError, Result as CliErrorResult};

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, debug};

/// Level shown on stderr.
///
/// Without `-v` the configured level is capped at `Warn`; each `-v` raises it
/// to info, debug and trace regardless of the configuration.
pub fn terminal_level(configured: LevelFilter, verbose: u8) -> LevelFilter {
    match verbose {
        0 => configured.min(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger.
///
/// # Arguments
/// * `log_level` - Configured level, applied to the log file
/// * `log_file` - Optional append-mode log file
/// * `colored` - Color level names on stderr
/// * `verbose` - Number of `-v` flags given on the command line
pub fn initialize(
    log_level: ud_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
    verbose: u8,
) -> CliErrorResult<()> {
    let stderr_level = terminal_level(*log_level, verbose);
    let mut dispatch = Dispatch::new().chain(terminal_dispatch(stderr_level, colored));

    if let Some(ref log_path) = log_file {
        dispatch = dispatch.chain(file_dispatch(*log_level, log_path)?);
    }

    dispatch.apply().map_err(|e| CliError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    debug!(
        "Logger initialized: stderr={:?}, file={}",
        stderr_level,
        log_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| String::from("none"))
    );

    Ok(())
}

fn terminal_dispatch(level: LevelFilter, colored: bool) -> Dispatch {
    let colors = colored.then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    Dispatch::new()
        .level(level)
        .format(move |out, message, record| match colors {
            Some(colors) => out.finish(format_args!(
                "{}: {}",
                colors.color(record.level()),
                message
            )),
            None => out.finish(format_args!("{}: {}", record.level(), message)),
        })
        .chain(std::io::stderr())
}

fn file_dispatch(level: LevelFilter, log_path: &Path) -> CliErrorResult<Dispatch> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::Logger {
            message: format!("Failed to create log directory {}: {}", parent.display(), e),
        })?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| CliError::Logger {
            message: format!("Failed to open log file {}: {}", log_path.display(), e),
        })?;

    Ok(Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(file))
}
