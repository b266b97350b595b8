use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{debug, warn, Level, LevelFilter};
use std::str::FromStr;

const RUST_LOG_ENV: &str = "RUST_LOG";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

fn color_from_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".white(),
    }
}

/// Logs go to stderr, stdout is reserved for progress lines and dry-run output.
fn init_logging_with_level(log_level: LevelFilter) {
    let applied = fern::Dispatch::new()
        .format(|out, message, record| {
            let time = Local::now().format("%H:%M:%S%.3f");
            let color = color_from_level(record.level());
            out.finish(format_args!("{time} {color} > {message}"));
        })
        .level(log_level)
        .chain(std::io::stderr())
        .apply();

    match applied {
        Ok(()) => debug!("🪵 Logging initialized with level: {log_level}"),
        Err(e) => eprintln!("💥 Failed to initialize logging with level `{log_level}`: {e}"),
    }
}

fn parse_log_level(log_level: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(log_level.trim()).ok()
}

// Setup logging once
use std::sync::Once;
static INIT: Once = Once::new();
fn init_logging_inner() {
    let Ok(raw) = std::env::var(RUST_LOG_ENV) else {
        init_logging_with_level(DEFAULT_LOG_LEVEL);
        return;
    };
    match parse_log_level(&raw) {
        Some(log_level) => init_logging_with_level(log_level),
        None => {
            init_logging_with_level(DEFAULT_LOG_LEVEL);
            warn!("Ignoring invalid `{RUST_LOG_ENV}` value {raw:?}, using {DEFAULT_LOG_LEVEL}");
        }
    }
}

/// Installs the global logger, reading the level from `RUST_LOG` (default `info`).
pub fn init_logging() {
    INIT.call_once(init_logging_inner);
}
