//! Output destinations for adapters.
//!
//! # Responsibilities
//! - Name the standard streams in configuration
//! - Translate a sink into each backend's writer type
//! - Provide an in-memory sink for capturing output

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriter};

/// A standard output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sink {
    #[default]
    Stdout,
    Stderr,
}

impl Sink {
    /// Target for an `env_logger` backend.
    pub fn env_logger_target(self) -> env_logger::Target {
        match self {
            Sink::Stdout => env_logger::Target::Stdout,
            Sink::Stderr => env_logger::Target::Stderr,
        }
    }

    /// Writer factory for a `tracing-subscriber` backend.
    pub fn make_writer(self) -> BoxMakeWriter {
        match self {
            Sink::Stdout => BoxMakeWriter::new(io::stdout),
            Sink::Stderr => BoxMakeWriter::new(io::stderr),
        }
    }
}

/// Shared in-memory buffer that both backends can write into.
///
/// Clones share the same buffer, so one clone can be handed to an adapter
/// while another is kept to read the output back.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer()).into_owned()
    }

    /// Written output split into lines, without line terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl io::Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MemorySink {
    type Writer = MemorySink;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
