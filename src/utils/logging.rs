use clap::ValueEnum;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::settings::{LogFormat, LoggingConfig, SettingsConfig};


#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match *self {
            LogLevel::TRACE => "TRACE",
            LogLevel::DEBUG => "DEBUG",
            LogLevel::INFO => "INFO",
            LogLevel::WARN => "WARN",
            LogLevel::ERROR => "ERROR",
        }
    }
}


/// Pick the effective logging config: CLI level wins over the configured one.
pub fn resolve(settings: &SettingsConfig, arg_log_level: Option<LogLevel>) -> LoggingConfig {
    let configured = settings.logging.clone();
    let format = configured
        .as_ref()
        .map(|config| config.format.to_owned())
        .unwrap_or(LogFormat::Compact);
    let level = arg_log_level
        .map(|level| level.as_str().to_owned())
        .or_else(|| configured.map(|config| config.level))
        .unwrap_or_else(|| "info".to_owned());

    LoggingConfig::new(level, format)
}

pub fn run(settings: &SettingsConfig, arg_log_level: Option<LogLevel>) {
    init_logging(&resolve(settings, arg_log_level));
}


/// Initialize tracing with the desired config.
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_new(&cfg.level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Base layer: filter + writer
    let registry = tracing_subscriber::registry().with(env_filter);

    // Choose format layer; logs go to stderr so command output stays clean
    match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .flatten_event(true)
                .with_writer(std::io::stderr)
                .with_ansi(false);

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_timer(UtcTime::rfc_3339())
                .with_writer(std::io::stderr)
                .with_ansi(true);

            let _ = registry.with(layer).try_init();
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_overrides_config() {
        let settings = SettingsConfig {
            logging: Some(LoggingConfig::new("warn".into(), LogFormat::Json)),
            ..SettingsConfig::default()
        };

        let resolved = resolve(&settings, Some(LogLevel::DEBUG));
        assert_eq!(resolved.level, "DEBUG");
        assert_eq!(resolved.format, LogFormat::Json);

        let resolved = resolve(&settings, None);
        assert_eq!(resolved.level, "warn");
    }

    #[test]
    fn defaults_without_config() {
        let resolved = resolve(&SettingsConfig::default(), None);
        assert_eq!(resolved.level, "info");
        assert_eq!(resolved.format, LogFormat::Compact);
    }
}
