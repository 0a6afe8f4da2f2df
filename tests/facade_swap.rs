//! The same call sites driven through every adapter.

use log_facade::config::schema::EncodingFormat;
use log_facade::config::{EncoderConfig, TracingConfig};
use log_facade::{LogLevel, Logger, MemorySink, NoopLogger};

mod common;

/// Call site that only knows the facade.
fn report(logger: &dyn Logger) {
    logger.info("Logrus adapter log info");
    logger.error("Logrus adapter log error");
}

#[test]
fn test_swapping_adapters_keeps_call_sites() {
    let (general_sink, general) = common::env_logger_adapter();
    let (structured_sink, structured) = common::tracing_adapter();

    let bindings: Vec<(&MemorySink, Box<dyn Logger>)> = vec![
        (&general_sink, Box::new(general) as Box<dyn Logger>),
        (&structured_sink, Box::new(structured) as Box<dyn Logger>),
    ];

    for (sink, logger) in &bindings {
        report(&**logger);

        let lines = sink.lines();
        assert_eq!(lines.len(), 2, "output: {lines:?}");
        assert!(lines[0].contains("INFO") && lines[0].contains("Logrus adapter log info"));
        assert!(lines[1].contains("ERROR") && lines[1].contains("Logrus adapter log error"));
    }
}

#[test]
fn test_rebinding_one_variable() {
    let (first_sink, first) = common::env_logger_adapter();
    let (second_sink, second) = common::tracing_adapter();

    let mut logger: Box<dyn Logger> = Box::new(first);
    logger.info("Logrus adapter log info");
    logger.error("Logrus adapter log error");

    logger = Box::new(second);
    logger.info("Zap adapter log info");
    logger.error("Zap adapter log error");

    assert_eq!(first_sink.lines().len(), 2);
    assert!(!first_sink.contents().contains("Zap"));

    let lines = second_sink.lines();
    assert_eq!(lines.len(), 2);
    for (line, (level, text)) in lines
        .iter()
        .zip([("INFO", "Zap adapter log info"), ("ERROR", "Zap adapter log error")])
    {
        let columns: Vec<&str> = line.split('\t').collect();
        assert_eq!(columns.len(), 3, "time, level and message expected: {line}");
        assert!(!columns[0].is_empty());
        assert_eq!(columns[1], level);
        assert_eq!(columns[2], text);
    }
}

#[test]
fn test_every_message_lands_exactly_once() {
    let messages = [
        "",
        "plain",
        "with\ttab",
        "unicode: żółw 🐢",
        "percent %s and braces {}",
    ];

    let (general_sink, general) = common::env_logger_adapter();
    let (structured_sink, structured) = common::tracing_adapter_with(TracingConfig {
        encoder: EncoderConfig {
            format: EncodingFormat::Json,
            ..EncoderConfig::default()
        },
        ..TracingConfig::default()
    });

    for message in messages {
        general.info(message);
        structured.info(message);
    }

    let general_lines = general_sink.lines();
    assert_eq!(general_lines.len(), messages.len());
    for (line, message) in general_lines.iter().zip(messages) {
        assert!(line.contains(message), "{line:?} missing {message:?}");
    }

    let structured_lines = structured_sink.lines();
    assert_eq!(structured_lines.len(), messages.len());
    for (line, message) in structured_lines.iter().zip(messages) {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["msg"], message);
        assert_eq!(value["level"], "INFO");
    }
}

#[test]
fn test_thresholds_differ_between_adapters() {
    let (general_sink, general) = common::env_logger_adapter();
    let (structured_sink, structured) = common::tracing_adapter();

    for logger in [&general as &dyn Logger, &structured as &dyn Logger] {
        logger.debug("cache miss for key 42");
    }

    assert!(general_sink.contents().is_empty());
    assert!(structured_sink.contents().contains("cache miss for key 42"));
    assert!(!general.enabled(LogLevel::Debug));
    assert!(structured.enabled(LogLevel::Debug));
}

#[test]
fn test_noop_accepts_the_same_calls() {
    report(&NoopLogger);
}
