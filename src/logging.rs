use crate::config::structs::configuration::Configuration;
use fern::colors::{Color, ColoredLevelConfig};
use log::{info, warn};

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None,
    }
}

/// Installs the global logger. An unknown `log_level` falls back to `info`.
pub fn setup_logging(config: &Configuration) -> Result<(), log::SetLoggerError> {
    let level = parse_log_level(config.log_level.as_str());

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level.unwrap_or(log::LevelFilter::Info))
        .chain(std::io::stdout())
        .apply()?;

    if level.is_none() {
        warn!("Unknown log level encountered: '{}', using 'info'", config.log_level);
    }
    info!("logging initialized.");
    Ok(())
}
