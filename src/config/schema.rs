//! Configuration schema definitions.
//!
//! Every adapter is built from one of these values. All types derive Serde
//! traits so they can be read from a TOML file, and every default matches
//! the behavior of the adapter when constructed with no configuration.

use serde::{Deserialize, Serialize};

use crate::adapters::AdapterKind;
use crate::facade::LogLevel;
use crate::sink::Sink;

/// Root configuration for the facade.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FacadeConfig {
    /// When set, the demo binary runs only this adapter.
    pub adapter: Option<AdapterKind>,

    /// Settings for the `env_logger` adapter.
    pub env_logger: EnvLoggerConfig,

    /// Settings for the `tracing` adapter.
    pub tracing: TracingConfig,
}

/// Whether ANSI colors are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colors when the sink looks like a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Precision of the timestamp prefix written by `env_logger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampPrecision {
    /// No timestamp at all.
    None,
    #[default]
    Seconds,
    Millis,
    Micros,
    Nanos,
}

/// `env_logger` adapter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnvLoggerConfig {
    /// Minimum emitted severity.
    pub level: LogLevel,

    /// Output stream. Defaults to stderr, like `env_logger` itself.
    pub sink: Sink,

    /// Level colors.
    pub color: ColorChoice,

    /// Timestamp prefix precision.
    pub timestamp: TimestampPrecision,

    /// `log` target attached to every record.
    pub target: String,

    /// Print the target after the level.
    pub show_target: bool,
}

impl Default for EnvLoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            sink: Sink::Stderr,
            color: ColorChoice::Auto,
            timestamp: TimestampPrecision::Seconds,
            target: env!("CARGO_CRATE_NAME").to_string(),
            show_target: true,
        }
    }
}

/// `tracing` adapter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TracingConfig {
    /// Minimum emitted severity.
    pub level: LogLevel,

    /// Output stream.
    pub sink: Sink,

    /// Logger name shown in the name column.
    pub name: Option<String>,

    /// Include the caller location.
    pub add_caller: bool,

    /// Attach a backtrace to messages at or above this level.
    pub stacktrace_level: Option<LogLevel>,

    /// Line layout.
    pub encoder: EncoderConfig,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            sink: Sink::Stdout,
            name: None,
            add_caller: false,
            stacktrace_level: None,
            encoder: EncoderConfig::default(),
        }
    }
}

/// Output layout of an encoded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingFormat {
    /// Tab-separated, human-readable columns.
    #[default]
    Console,
    /// One JSON object per line.
    Json,
}

/// How the level column is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelEncoding {
    /// `INFO`
    Capital,
    /// `INFO`, colored by severity.
    #[default]
    CapitalColor,
    /// `info`
    Lowercase,
    /// `info`, colored by severity.
    LowercaseColor,
}

impl LevelEncoding {
    pub fn is_colored(self) -> bool {
        matches!(self, LevelEncoding::CapitalColor | LevelEncoding::LowercaseColor)
    }
}

/// How the time column is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeEncoding {
    /// ISO 8601 / RFC 3339 UTC timestamp.
    #[default]
    Iso8601,
    /// Milliseconds since the Unix epoch.
    EpochMillis,
    /// Time elapsed since the adapter was built.
    Uptime,
}

/// How the caller column is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallerEncoding {
    /// Parent directory and file name, e.g. `src/main.rs:12`.
    #[default]
    Short,
    /// Path exactly as the compiler recorded it.
    Full,
}

/// Field-to-column mapping for the structured encoder.
///
/// An empty key removes that column from the output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub time_key: String,
    pub level_key: String,
    pub name_key: String,
    pub caller_key: String,
    pub message_key: String,
    pub stacktrace_key: String,
    pub format: EncodingFormat,
    pub level_encoding: LevelEncoding,
    pub time_encoding: TimeEncoding,
    pub caller_encoding: CallerEncoding,
    pub line_ending: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            time_key: "time".to_string(),
            level_key: "level".to_string(),
            name_key: "logger".to_string(),
            caller_key: "caller".to_string(),
            message_key: "msg".to_string(),
            stacktrace_key: "stacktrace".to_string(),
            format: EncodingFormat::Console,
            level_encoding: LevelEncoding::CapitalColor,
            time_encoding: TimeEncoding::Iso8601,
            caller_encoding: CallerEncoding::Short,
            line_ending: "\n".to_string(),
        }
    }
}

impl EncoderConfig {
    /// Configured keys paired with the option name they came from.
    pub fn keys(&self) -> [(&'static str, &str); 6] {
        [
            ("time_key", &self.time_key),
            ("level_key", &self.level_key),
            ("name_key", &self.name_key),
            ("caller_key", &self.caller_key),
            ("message_key", &self.message_key),
            ("stacktrace_key", &self.stacktrace_key),
        ]
    }
}
