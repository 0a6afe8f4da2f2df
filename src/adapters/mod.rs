//! Backend adapters.
//!
//! # Data Flow
//! ```text
//! FacadeConfig + AdapterKind
//!     → build_logger()
//!     → env_logger_adapter.rs (log records, env_logger formatting)
//!     | tracing_adapter.rs (tracing events, structured encoder)
//!     | noop.rs (discard)
//!     → Box<dyn Logger>
//! ```
//!
//! # Design Decisions
//! - Each adapter exclusively owns its backend instance
//! - Configuration is read once at construction; adapters are immutable after
//! - `build_logger` maps a kind to an adapter behind `Box<dyn Logger>`

mod env_logger_adapter;
mod noop;
mod tracing_adapter;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::FacadeConfig;
use crate::facade::Logger;

pub use env_logger_adapter::EnvLoggerAdapter;
pub use noop::NoopLogger;
pub use tracing_adapter::TracingAdapter;

/// Which adapter to bind behind the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterKind {
    /// `log` records formatted by `env_logger`.
    EnvLogger,
    /// `tracing` events formatted by the structured encoder.
    Tracing,
    /// Discard everything.
    Noop,
}

impl AdapterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AdapterKind::EnvLogger => "env_logger",
            AdapterKind::Tracing => "tracing",
            AdapterKind::Noop => "noop",
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown adapter '{0}' (expected env_logger, tracing or noop)")]
pub struct ParseAdapterError(pub String);

impl FromStr for AdapterKind {
    type Err = ParseAdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "env_logger" => Ok(AdapterKind::EnvLogger),
            "tracing" => Ok(AdapterKind::Tracing),
            "noop" => Ok(AdapterKind::Noop),
            _ => Err(ParseAdapterError(s.to_string())),
        }
    }
}

/// Construct the adapter named by `kind` from its section of `config`.
pub fn build_logger(kind: AdapterKind, config: &FacadeConfig) -> Box<dyn Logger> {
    match kind {
        AdapterKind::EnvLogger => Box::new(EnvLoggerAdapter::new(&config.env_logger)),
        AdapterKind::Tracing => Box::new(TracingAdapter::new(&config.tracing)),
        AdapterKind::Noop => Box::new(NoopLogger),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::LogLevel;

    #[test]
    fn test_parse_adapter_kind() {
        assert_eq!("env_logger".parse::<AdapterKind>().unwrap(), AdapterKind::EnvLogger);
        assert_eq!("env-logger".parse::<AdapterKind>().unwrap(), AdapterKind::EnvLogger);
        assert_eq!("Tracing".parse::<AdapterKind>().unwrap(), AdapterKind::Tracing);
        assert_eq!("noop".parse::<AdapterKind>().unwrap(), AdapterKind::Noop);
        assert!("syslog".parse::<AdapterKind>().is_err());
    }

    #[test]
    fn test_display_matches_serde_name() {
        for kind in [AdapterKind::EnvLogger, AdapterKind::Tracing, AdapterKind::Noop] {
            assert_eq!(kind.to_string().parse::<AdapterKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_build_logger_honours_thresholds() {
        let config = FacadeConfig::default();

        let general = build_logger(AdapterKind::EnvLogger, &config);
        assert!(!general.enabled(LogLevel::Debug));
        assert!(general.enabled(LogLevel::Info));

        let structured = build_logger(AdapterKind::Tracing, &config);
        assert!(structured.enabled(LogLevel::Debug));
        assert!(!structured.enabled(LogLevel::Trace));

        let silent = build_logger(AdapterKind::Noop, &config);
        assert!(!silent.enabled(LogLevel::Error));
    }
}
