use std::sync::OnceLock;
use std::time::{Duration, Instant};

use crate::constants::{LOG_PREFIX_ERROR, LOG_PREFIX_SUCCESS, LOG_PREFIX_WARNING};

pub struct LogConfig {
    pub debug_enabled: bool,
}

static LOG_CONFIG: OnceLock<LogConfig> = OnceLock::new();

impl LogConfig {
    pub fn init(debug: bool) {
        LOG_CONFIG.get_or_init(|| LogConfig {
            debug_enabled: debug,
        });
    }

    pub fn get() -> &'static LogConfig {
        LOG_CONFIG.get().unwrap_or_else(|| {
            static FALLBACK: LogConfig = LogConfig {
                debug_enabled: false,
            };
            &FALLBACK
        })
    }
}

/// Installs the fern dispatcher used by the CLI.
pub fn setup_logging(log_level: &str) -> Result<(), log::SetLoggerError> {
    let level = log_level
        .to_lowercase()
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Info);

    fern::Dispatch::new()
        .format(|out, message, record| {
            let level_str = match record.level() {
                log::Level::Error => "\x1b[1;31merror:\x1b[0m",
                log::Level::Warn => "\x1b[1;33mwarn:\x1b[0m",
                log::Level::Info => "\x1b[1;32minfo:\x1b[0m",
                log::Level::Debug => "\x1b[1;34mdebug:\x1b[0m",
                log::Level::Trace => "\x1b[1;35mtrace:\x1b[0m",
            };
            out.finish(format_args!("{} {}", level_str, message))
        })
        .level(level)
        .level_for("hyper_util", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;

    LogConfig::init(matches!(
        level,
        log::LevelFilter::Debug | log::LevelFilter::Trace
    ));

    Ok(())
}

pub fn log_request(method: &str, path: &str) {
    log::info!("{} {}", method, sanitize_log_message(path));
}

pub fn log_timed(prefix: &str, operation: &str, start: Instant) {
    let duration = start.elapsed();
    let formatted_duration = format_duration(duration);

    match prefix {
        LOG_PREFIX_SUCCESS => log::info!("{} | {}", operation, formatted_duration),
        LOG_PREFIX_ERROR => log::error!("{} | {}", operation, formatted_duration),
        LOG_PREFIX_WARNING => log::warn!("{} | {}", operation, formatted_duration),
        _ => log::info!("{} | {}", operation, formatted_duration),
    }
}

pub fn format_duration(duration: Duration) -> String {
    let total_nanos = duration.as_nanos();

    if total_nanos < 1_000_000 {
        format!("{:.1}µs", total_nanos as f64 / 1_000.0)
    } else if total_nanos < 1_000_000_000 {
        format!("{:.2}ms", total_nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", total_nanos as f64 / 1_000_000_000.0)
    }
}

/// Replaces control characters so server-provided text can't mangle the terminal.
pub fn sanitize_log_message(message: &str) -> String {
    message
        .chars()
        .map(|c| {
            if c.is_control() && !matches!(c, '\t' | '\n' | '\r') {
                '?'
            } else {
                c
            }
        })
        .collect()
}

pub fn log_response_io(path: &str, response: &serde_json::Value) {
    if LogConfig::get().debug_enabled {
        log::debug!(
            "{} response: {}",
            sanitize_log_message(path),
            serde_json::to_string_pretty(response).unwrap_or_default()
        );
    }
}
