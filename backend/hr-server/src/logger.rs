use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Arguments;
use std::panic::Location;
use std::path::PathBuf;
use std::time::SystemTime;

use error_location::ErrorLocation;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = append to file
/// * `colored` - Enable colored output (ignored when logging to file)
#[track_caller]
pub fn initialize(
    log_level: hr_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;
    let caller = Location::caller();

    let output = match &log_file {
        Some(log_path) => {
            let file = fern::log_file(log_path).map_err(|e| ServerError::Io {
                message: format!("Failed to open log file {}", log_path.display()),
                source: e,
                location: ErrorLocation::from(caller),
            })?;
            Dispatch::new().format(plain_format).chain(file)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        // Plain output for non-TTY (systemd, docker logs)
        None => Dispatch::new().format(plain_format).chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(caller),
        })?;

    match &log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}

fn plain_format(out: FormatCallback, message: &Arguments, record: &Record) {
    write_line(out, message, record, record.level())
}

fn write_line(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    level: impl std::fmt::Display,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
