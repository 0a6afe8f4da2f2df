//! Logging facade.
//!
//! # Data Flow
//! ```text
//! caller
//!     → &dyn Logger / Box<dyn Logger> (info, error, ...)
//!     → LogMessage { level, text }
//!     → adapter (env_logger or tracing backend)
//!     → sink (stdout, stderr, memory)
//! ```
//!
//! # Design Decisions
//! - Callers hold the trait object, never a concrete adapter
//! - Emission never returns an error; backend faults stay in the backend
//! - No global logger is installed; each adapter owns its backend

mod level;
mod logger;

pub use level::{LogLevel, ParseLevelError};
pub use logger::{LogMessage, Logger};
