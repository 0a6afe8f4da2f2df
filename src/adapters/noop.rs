//! Adapter that discards everything.

use crate::facade::{LogLevel, LogMessage, Logger};

/// Logger that drops every message. Useful where output would be noise.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    #[inline]
    fn emit(&self, _message: LogMessage<'_>) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}
