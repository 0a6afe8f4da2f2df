//! Logging facade with interchangeable backend adapters.

pub mod adapters;
pub mod config;
pub mod encoder;
pub mod facade;
pub mod sink;

pub use adapters::{build_logger, AdapterKind, EnvLoggerAdapter, NoopLogger, TracingAdapter};
pub use config::FacadeConfig;
pub use facade::{LogLevel, LogMessage, Logger};
pub use sink::{MemorySink, Sink};
