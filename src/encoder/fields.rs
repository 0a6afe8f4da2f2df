//! Field collection for a single event.

use std::fmt;

use serde_json::{Map, Value};
use tracing::field::{Field, Visit};

/// Field carrying the caller's source file.
pub const CALLER_FILE_FIELD: &str = "caller.file";
/// Field carrying the caller's line number.
pub const CALLER_LINE_FIELD: &str = "caller.line";
/// Field carrying a rendered backtrace.
pub const STACKTRACE_FIELD: &str = "stacktrace";

const MESSAGE_FIELD: &str = "message";

/// Values recorded from one event, with the reserved fields pulled out.
#[derive(Debug, Default)]
pub(crate) struct EventFields {
    pub message: Option<String>,
    pub caller_file: Option<String>,
    pub caller_line: Option<u32>,
    pub stacktrace: Option<String>,
    pub extra: Map<String, Value>,
}

impl EventFields {
    fn insert(&mut self, field: &Field, value: Value) {
        match field.name() {
            MESSAGE_FIELD => self.message = Some(into_text(value)),
            CALLER_FILE_FIELD => self.caller_file = Some(into_text(value)),
            CALLER_LINE_FIELD => {
                self.caller_line = value.as_u64().and_then(|line| u32::try_from(line).ok());
            }
            STACKTRACE_FIELD => {
                let trace = into_text(value);
                if !trace.is_empty() {
                    self.stacktrace = Some(trace);
                }
            }
            name => {
                self.extra.insert(name.to_string(), value);
            }
        }
    }
}

fn into_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, Value::from(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, Value::from(value.to_string()));
    }

    // Durations and other `?`-recorded values keep their Debug text, e.g. `1.5s`.
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, Value::from(format!("{value:?}")));
    }
}
