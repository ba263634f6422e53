use crate::config::LogSettings;
use anyhow::{Result, anyhow};
use tracing::level_filters::LevelFilter;

/// Picks the log level. An unset or unknown `LOG_LEVEL` gives `info`, except
/// outside production where an unset level means `debug`.
pub fn level_filter(settings: &LogSettings) -> LevelFilter {
    match settings.level.as_deref() {
        Some(level) => match level.trim().to_lowercase().as_str() {
            "trace" => LevelFilter::TRACE,
            "debug" => LevelFilter::DEBUG,
            "warn" => LevelFilter::WARN,
            "error" | "dpanic" | "panic" | "fatal" => LevelFilter::ERROR,
            _ => LevelFilter::INFO,
        },
        None if settings.production => LevelFilter::INFO,
        None => LevelFilter::DEBUG,
    }
}

/// Installs the global subscriber. Logs go to stderr so reports on stdout
/// stay clean; production output is JSON.
pub fn init_logging(settings: &LogSettings) -> Result<()> {
    let level = level_filter(settings);
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr);

    let installed = if settings.production {
        builder.json().try_init()
    } else {
        builder.with_target(false).try_init()
    };

    installed.map_err(|e| anyhow!("Cannot set up logger: {}", e))
}
