//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FacadeConfig (validated, immutable)
//!     → passed by reference to each adapter constructor
//! ```
//!
//! # Design Decisions
//! - Config is read once; adapters copy what they need at construction
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{EncoderConfig, EnvLoggerConfig, FacadeConfig, TracingConfig};
pub use validation::ValidationError;
