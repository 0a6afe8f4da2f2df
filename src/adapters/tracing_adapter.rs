//! Adapter over the `tracing` ecosystem with a structured encoder.

use std::backtrace::Backtrace;
use std::panic::Location;

use tracing::{Dispatch, Level};
use tracing_subscriber::fmt::MakeWriter;

use crate::config::schema::TracingConfig;
use crate::encoder::FieldEncoder;
use crate::facade::{LogLevel, LogMessage, Logger};

/// Structured adapter.
///
/// Owns a `tracing_subscriber::fmt` subscriber wrapped in a [`Dispatch`].
/// Each call makes that dispatcher the default for the duration of the call
/// only, so the process-wide subscriber (if any) is left alone.
#[derive(Debug, Clone)]
pub struct TracingAdapter {
    dispatch: Dispatch,
    level: LogLevel,
    stacktrace_level: Option<LogLevel>,
}

macro_rules! emit_at {
    ($level:expr, $caller:expr, $stacktrace:expr, $text:expr) => {
        tracing::event!(
            target: "log_facade",
            $level,
            caller.file = $caller.file(),
            caller.line = $caller.line(),
            stacktrace = $stacktrace,
            "{}",
            $text
        )
    };
}

impl TracingAdapter {
    /// Build an adapter writing to the configured sink.
    pub fn new(config: &TracingConfig) -> Self {
        Self::with_writer(config, config.sink.make_writer())
    }

    /// Build an adapter writing through `make_writer` instead of the configured sink.
    pub fn with_writer<W>(config: &TracingConfig, make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let encoder = FieldEncoder::new(config.encoder.clone())
            .with_name(config.name.clone())
            .with_caller(config.add_caller);

        let subscriber = tracing_subscriber::fmt()
            .with_writer(make_writer)
            .with_max_level(config.level)
            .with_ansi(config.encoder.level_encoding.is_colored())
            .event_format(encoder)
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
            level: config.level,
            stacktrace_level: config.stacktrace_level,
        }
    }

    fn stacktrace(&self, level: LogLevel) -> Option<String> {
        self.stacktrace_level
            .filter(|threshold| level >= *threshold)
            .map(|_| Backtrace::force_capture().to_string())
    }
}

impl Logger for TracingAdapter {
    #[track_caller]
    fn emit(&self, message: LogMessage<'_>) {
        if !self.enabled(message.level()) {
            return;
        }
        let caller = Location::caller();
        let stacktrace = self.stacktrace(message.level()).unwrap_or_default();
        let stacktrace = stacktrace.as_str();
        let text = message.text();

        tracing::dispatcher::with_default(&self.dispatch, || match message.level() {
            LogLevel::Trace => emit_at!(Level::TRACE, caller, stacktrace, text),
            LogLevel::Debug => emit_at!(Level::DEBUG, caller, stacktrace, text),
            LogLevel::Info => emit_at!(Level::INFO, caller, stacktrace, text),
            LogLevel::Warn => emit_at!(Level::WARN, caller, stacktrace, text),
            LogLevel::Error => emit_at!(Level::ERROR, caller, stacktrace, text),
        });
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }
}
