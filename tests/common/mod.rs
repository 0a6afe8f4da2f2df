//! Shared helpers for integration tests.

use log_facade::config::schema::{ColorChoice, LevelEncoding};
use log_facade::config::{EnvLoggerConfig, TracingConfig};
use log_facade::{EnvLoggerAdapter, MemorySink, TracingAdapter};

/// `env_logger` adapter with default settings, writing uncolored into memory.
pub fn env_logger_adapter() -> (MemorySink, EnvLoggerAdapter) {
    let sink = MemorySink::new();
    let config = EnvLoggerConfig {
        color: ColorChoice::Never,
        ..EnvLoggerConfig::default()
    };
    (sink.clone(), EnvLoggerAdapter::with_writer(&config, sink))
}

/// `tracing` adapter with default settings, writing uncolored into memory.
pub fn tracing_adapter() -> (MemorySink, TracingAdapter) {
    tracing_adapter_with(TracingConfig::default())
}

/// `tracing` adapter from `config` with plain level labels, writing into memory.
pub fn tracing_adapter_with(mut config: TracingConfig) -> (MemorySink, TracingAdapter) {
    let sink = MemorySink::new();
    config.encoder.level_encoding = LevelEncoding::Capital;
    (sink.clone(), TracingAdapter::with_writer(&config, sink))
}
