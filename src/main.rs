//! Logging facade demo.
//!
//! # Data Flow
//! ```text
//! call site (info / error)
//!     → Box<dyn Logger>
//!     → EnvLoggerAdapter (log::Record → env_logger format)
//!     | TracingAdapter   (tracing event → FieldEncoder)
//!     → stderr (env_logger) / stdout (tracing)
//! ```
//!
//! With no arguments the same `Box<dyn Logger>` variable is bound first to
//! the `env_logger` adapter and then to the `tracing` adapter, and the same
//! two calls are made through it each time.

use std::path::PathBuf;

use clap::Parser;

use log_facade::config::{load_config, FacadeConfig};
use log_facade::{build_logger, AdapterKind, EnvLoggerAdapter, Logger, TracingAdapter};

#[derive(Parser)]
#[command(name = "log-facade")]
#[command(about = "Emit sample lines through interchangeable logging adapters", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run a single adapter (env_logger, tracing or noop) instead of both.
    #[arg(short, long)]
    adapter: Option<AdapterKind>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FacadeConfig::default(),
    };

    if let Some(kind) = cli.adapter.or(config.adapter) {
        let logger = build_logger(kind, &config);
        logger.info(&format!("{kind} adapter log info"));
        logger.error(&format!("{kind} adapter log error"));
        logger.flush();
        return Ok(());
    }

    let mut logger: Box<dyn Logger> = Box::new(EnvLoggerAdapter::new(&config.env_logger));
    logger.info("Logrus adapter log info");
    logger.error("Logrus adapter log error");
    logger.flush();

    logger = Box::new(TracingAdapter::new(&config.tracing));
    logger.info("Zap adapter log info");
    logger.error("Zap adapter log error");
    logger.flush();

    Ok(())
}
