//! Structured line encoder for the `tracing` adapter.
//!
//! # Responsibilities
//! - Map event data onto the configured columns (time, level, name, caller,
//!   message, stacktrace)
//! - Render those columns as a console line or a JSON object
//! - Color level labels when asked to
//!
//! # Design Decisions
//! - Implemented as a `tracing-subscriber` `FormatEvent`, so it plugs into a
//!   stock `fmt` subscriber
//! - An empty key drops its column in both formats
//! - Fields other than the reserved ones are appended, never dropped

mod fields;

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Map, Value};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{self, FormatTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::config::schema::{
    CallerEncoding, EncoderConfig, EncodingFormat, LevelEncoding, TimeEncoding,
};
use crate::facade::LogLevel;

pub use fields::{CALLER_FILE_FIELD, CALLER_LINE_FIELD, STACKTRACE_FIELD};

use fields::EventFields;

/// `FormatEvent` implementation driven by an [`EncoderConfig`].
#[derive(Debug)]
pub struct FieldEncoder {
    config: EncoderConfig,
    name: Option<String>,
    add_caller: bool,
    uptime: time::Uptime,
}

impl FieldEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            config,
            name: None,
            add_caller: false,
            uptime: time::Uptime::default(),
        }
    }

    /// Logger name written to the name column.
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Write the caller column.
    pub fn with_caller(mut self, add_caller: bool) -> Self {
        self.add_caller = add_caller;
        self
    }

    fn encode_time(&self) -> String {
        let mut out = String::new();
        let result = match self.config.time_encoding {
            TimeEncoding::Iso8601 => time::SystemTime.format_time(&mut Writer::new(&mut out)),
            TimeEncoding::Uptime => self.uptime.format_time(&mut Writer::new(&mut out)),
            TimeEncoding::EpochMillis => {
                let millis = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|elapsed| elapsed.as_millis())
                    .unwrap_or_default();
                out = millis.to_string();
                Ok(())
            }
        };
        if result.is_err() {
            out.clear();
        }
        out
    }

    fn encode_caller(&self, file: &str, line: u32) -> String {
        match self.config.caller_encoding {
            CallerEncoding::Full => format!("{file}:{line}"),
            CallerEncoding::Short => short_caller(file, line),
        }
    }

    fn console_line(&self, level: LogLevel, caller: Option<String>, fields: EventFields) -> String {
        let keys = &self.config;
        let mut columns: Vec<String> = Vec::with_capacity(6);

        if !keys.time_key.is_empty() {
            columns.push(self.encode_time());
        }
        if !keys.level_key.is_empty() {
            columns.push(encode_level(level, keys.level_encoding));
        }
        if let (false, Some(name)) = (keys.name_key.is_empty(), &self.name) {
            columns.push(name.clone());
        }
        if let (false, Some(caller)) = (keys.caller_key.is_empty(), caller) {
            columns.push(caller);
        }
        if !keys.message_key.is_empty() {
            columns.push(fields.message.unwrap_or_default());
        }
        if !fields.extra.is_empty() {
            columns.push(Value::Object(fields.extra).to_string());
        }

        let mut line = columns.join("\t");
        if let (false, Some(trace)) = (keys.stacktrace_key.is_empty(), fields.stacktrace) {
            line.push_str(&keys.line_ending);
            line.push_str(trace.trim_end());
        }
        line.push_str(&keys.line_ending);
        line
    }

    fn json_line(&self, level: LogLevel, caller: Option<String>, fields: EventFields) -> String {
        let keys = &self.config;
        let mut object = Map::new();

        if !keys.time_key.is_empty() {
            object.insert(keys.time_key.clone(), Value::from(self.encode_time()));
        }
        if !keys.level_key.is_empty() {
            // Escape codes would corrupt the JSON string.
            let plain = match keys.level_encoding {
                LevelEncoding::Capital | LevelEncoding::CapitalColor => LevelEncoding::Capital,
                LevelEncoding::Lowercase | LevelEncoding::LowercaseColor => LevelEncoding::Lowercase,
            };
            object.insert(keys.level_key.clone(), Value::from(encode_level(level, plain)));
        }
        if let (false, Some(name)) = (keys.name_key.is_empty(), &self.name) {
            object.insert(keys.name_key.clone(), Value::from(name.as_str()));
        }
        if let (false, Some(caller)) = (keys.caller_key.is_empty(), caller) {
            object.insert(keys.caller_key.clone(), Value::from(caller));
        }
        if !keys.message_key.is_empty() {
            object.insert(
                keys.message_key.clone(),
                Value::from(fields.message.unwrap_or_default()),
            );
        }
        for (key, value) in fields.extra {
            object.entry(key).or_insert(value);
        }
        if let (false, Some(trace)) = (keys.stacktrace_key.is_empty(), fields.stacktrace) {
            object.insert(keys.stacktrace_key.clone(), Value::from(trace));
        }

        let mut line = Value::Object(object).to_string();
        line.push_str(&keys.line_ending);
        line
    }
}

impl<S, N> FormatEvent<S, N> for FieldEncoder
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = EventFields::default();
        event.record(&mut fields);

        let metadata = event.metadata();
        let level = LogLevel::from(*metadata.level());
        let caller = if self.add_caller {
            let file = fields.caller_file.take().or_else(|| metadata.file().map(str::to_owned));
            let line = fields.caller_line.take().or_else(|| metadata.line());
            file.zip(line).map(|(file, line)| self.encode_caller(&file, line))
        } else {
            None
        };

        let line = match self.config.format {
            EncodingFormat::Console => self.console_line(level, caller, fields),
            EncodingFormat::Json => self.json_line(level, caller, fields),
        };
        writer.write_str(&line)
    }
}

/// Render a level label in the given style.
pub fn encode_level(level: LogLevel, encoding: LevelEncoding) -> String {
    let label = match encoding {
        LevelEncoding::Capital | LevelEncoding::CapitalColor => level.as_str().to_ascii_uppercase(),
        LevelEncoding::Lowercase | LevelEncoding::LowercaseColor => level.as_str().to_string(),
    };
    if !encoding.is_colored() {
        return label;
    }

    let styled = console::style(label).force_styling(true);
    match level {
        LogLevel::Trace => styled.dim(),
        LogLevel::Debug => styled.magenta(),
        LogLevel::Info => styled.blue(),
        LogLevel::Warn => styled.yellow(),
        LogLevel::Error => styled.red(),
    }
    .to_string()
}

/// `dir/file.rs:line` from a full source path.
pub fn short_caller(file: &str, line: u32) -> String {
    let mut parts = file.rsplitn(3, ['/', '\\']);
    let name = parts.next().unwrap_or(file);
    match parts.next() {
        Some(dir) => format!("{dir}/{name}:{line}"),
        None => format!("{name}:{line}"),
    }
}
