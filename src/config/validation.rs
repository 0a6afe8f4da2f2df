//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that encoder keys produce an unambiguous layout
//! - Reject values the backends would silently mangle
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FacadeConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::FacadeConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Without a message column the log text would never be written.
    #[error("tracing.encoder.message_key must not be empty")]
    EmptyMessageKey,

    /// Two columns mapped onto the same key.
    #[error("tracing.encoder.{first} and tracing.encoder.{second} both use key '{key}'")]
    DuplicateKey {
        key: String,
        first: &'static str,
        second: &'static str,
    },

    /// Lines must be terminated.
    #[error("tracing.encoder.line_ending must not be empty")]
    EmptyLineEnding,

    /// `log` records need a target.
    #[error("env_logger.target must not be empty")]
    EmptyTarget,
}

/// Check a parsed configuration, collecting every violation.
pub fn validate_config(config: &FacadeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let encoder = &config.tracing.encoder;

    if encoder.message_key.is_empty() {
        errors.push(ValidationError::EmptyMessageKey);
    }

    let keys = encoder.keys();
    for (i, &(first, key)) in keys.iter().enumerate() {
        if key.is_empty() {
            continue;
        }
        if let Some(&(second, _)) = keys[i + 1..].iter().find(|(_, other)| *other == key) {
            errors.push(ValidationError::DuplicateKey {
                key: key.to_string(),
                first,
                second,
            });
        }
    }

    if encoder.line_ending.is_empty() {
        errors.push(ValidationError::EmptyLineEnding);
    }

    if config.env_logger.target.trim().is_empty() {
        errors.push(ValidationError::EmptyTarget);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
