//! Adapter over the `log` record model and the `env_logger` backend.

use std::fmt;
use std::io;
use std::panic::Location;

use log::{Log, Record};

use crate::config::schema::{ColorChoice, EnvLoggerConfig, TimestampPrecision};
use crate::facade::{LogLevel, LogMessage, Logger};

/// General-purpose adapter.
///
/// Owns a private `env_logger::Logger`; nothing is installed as the global
/// `log` logger and `RUST_LOG` is never read. Output uses `env_logger`'s
/// default line format.
pub struct EnvLoggerAdapter {
    backend: env_logger::Logger,
    target: String,
    level: LogLevel,
}

impl EnvLoggerAdapter {
    /// Build an adapter writing to the configured sink.
    pub fn new(config: &EnvLoggerConfig) -> Self {
        Self::build(config, config.sink.env_logger_target())
    }

    /// Build an adapter writing to `writer` instead of the configured sink.
    pub fn with_writer<W>(config: &EnvLoggerConfig, writer: W) -> Self
    where
        W: io::Write + Send + 'static,
    {
        Self::build(config, env_logger::Target::Pipe(Box::new(writer)))
    }

    fn build(config: &EnvLoggerConfig, target: env_logger::Target) -> Self {
        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(config.level.into())
            .target(target)
            .write_style(match config.color {
                ColorChoice::Auto => env_logger::WriteStyle::Auto,
                ColorChoice::Always => env_logger::WriteStyle::Always,
                ColorChoice::Never => env_logger::WriteStyle::Never,
            })
            .format_timestamp(match config.timestamp {
                TimestampPrecision::None => None,
                TimestampPrecision::Seconds => Some(env_logger::TimestampPrecision::Seconds),
                TimestampPrecision::Millis => Some(env_logger::TimestampPrecision::Millis),
                TimestampPrecision::Micros => Some(env_logger::TimestampPrecision::Micros),
                TimestampPrecision::Nanos => Some(env_logger::TimestampPrecision::Nanos),
            })
            .format_target(config.show_target);

        Self {
            backend: builder.build(),
            target: config.target.clone(),
            level: config.level,
        }
    }
}

impl fmt::Debug for EnvLoggerAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvLoggerAdapter")
            .field("target", &self.target)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl Logger for EnvLoggerAdapter {
    #[track_caller]
    fn emit(&self, message: LogMessage<'_>) {
        let caller = Location::caller();
        self.backend.log(
            &Record::builder()
                .level(message.level().into())
                .target(&self.target)
                .file(Some(caller.file()))
                .line(Some(caller.line()))
                .args(format_args!("{}", message.text()))
                .build(),
        );
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    fn flush(&self) {
        self.backend.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn capture(config: EnvLoggerConfig) -> (MemorySink, EnvLoggerAdapter) {
        let sink = MemorySink::new();
        let config = EnvLoggerConfig {
            color: ColorChoice::Never,
            ..config
        };
        let adapter = EnvLoggerAdapter::with_writer(&config, sink.clone());
        (sink, adapter)
    }

    #[test]
    fn test_info_writes_one_line() {
        let (sink, logger) = capture(EnvLoggerConfig::default());
        logger.info("service started");

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("log_facade"));
        assert!(lines[0].ends_with("service started"));
    }

    #[test]
    fn test_error_is_tagged_error() {
        let (sink, logger) = capture(EnvLoggerConfig::default());
        logger.error("connection refused");

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("connection refused"));
    }

    #[test]
    fn test_info_threshold_suppresses_debug() {
        let (sink, logger) = capture(EnvLoggerConfig::default());
        logger.debug("cache warmed");
        logger.trace("cache entry 17");

        assert!(sink.contents().is_empty());
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(logger.enabled(LogLevel::Warn));
    }

    #[test]
    fn test_lowered_threshold_emits_debug() {
        let (sink, logger) = capture(EnvLoggerConfig {
            level: LogLevel::Debug,
            ..EnvLoggerConfig::default()
        });
        logger.debug("cache warmed");

        assert_eq!(sink.lines().len(), 1);
        assert!(sink.contents().contains("DEBUG"));
    }

    #[test]
    fn test_bare_format_without_timestamp_or_target() {
        let (sink, logger) = capture(EnvLoggerConfig {
            timestamp: TimestampPrecision::None,
            show_target: false,
            ..EnvLoggerConfig::default()
        });
        logger.warn("quota at 80%");

        assert_eq!(sink.lines(), vec!["[WARN ] quota at 80%"]);
    }

    #[test]
    fn test_custom_target_is_printed() {
        let (sink, logger) = capture(EnvLoggerConfig {
            target: "billing".to_string(),
            timestamp: TimestampPrecision::None,
            ..EnvLoggerConfig::default()
        });
        logger.info("invoice sent");

        assert_eq!(sink.lines(), vec!["[INFO  billing] invoice sent"]);
    }
}
