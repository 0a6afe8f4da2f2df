//! The `Logger` capability trait.

use std::sync::Arc;

use crate::facade::LogLevel;

/// A single log call: a severity and its text.
///
/// Built for each call, handed to the backend and dropped; adapters never
/// retain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogMessage<'a> {
    level: LogLevel,
    text: &'a str,
}

impl<'a> LogMessage<'a> {
    pub fn new(level: LogLevel, text: &'a str) -> Self {
        Self { level, text }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn text(&self) -> &'a str {
        self.text
    }
}

/// Logging interface that callers hold instead of a concrete backend.
///
/// Emission is infallible from the caller's side: whatever the backend does
/// with a write failure stays inside the adapter.
///
/// Methods carry `#[track_caller]` so adapters that report caller locations
/// see the call site rather than this trait.
pub trait Logger: Send + Sync {
    /// Hand one message to the backend.
    #[track_caller]
    fn emit(&self, message: LogMessage<'_>);

    /// Whether a message at `level` would pass this logger's threshold.
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    /// Flush anything the backend buffers. Most backends write through.
    fn flush(&self) {}

    #[track_caller]
    fn log(&self, level: LogLevel, message: &str) {
        self.emit(LogMessage::new(level, message));
    }

    #[track_caller]
    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }

    #[track_caller]
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    #[track_caller]
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    #[track_caller]
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    #[track_caller]
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    #[track_caller]
    fn emit(&self, message: LogMessage<'_>) {
        (**self).emit(message);
    }

    fn enabled(&self, level: LogLevel) -> bool {
        (**self).enabled(level)
    }

    fn flush(&self) {
        (**self).flush();
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    #[track_caller]
    fn emit(&self, message: LogMessage<'_>) {
        (**self).emit(message);
    }

    fn enabled(&self, level: LogLevel) -> bool {
        (**self).enabled(level)
    }

    fn flush(&self) {
        (**self).flush();
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    #[track_caller]
    fn emit(&self, message: LogMessage<'_>) {
        (**self).emit(message);
    }

    fn enabled(&self, level: LogLevel) -> bool {
        (**self).enabled(level)
    }

    fn flush(&self) {
        (**self).flush();
    }
}
