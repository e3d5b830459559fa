//! Timestamped console logger singleton.
//!
//! [`Logger::instance`](sg_core::Singleton::instance) returns the one logger of
//! the process, which writes to standard output.  Each call to
//! [`Logger::log`] writes a single line of the form
//!
//! ```text
//! [LOG - 2024-05-01 14:03:59] message
//! ```
//!
//! stamped with the local wall-clock time.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Local, TimeZone};
use sg_core::{define_singleton, Error, InstanceId, Result};

/// Timestamp layout used in log lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A line-oriented logger with exactly one instance per process.
pub struct Logger {
    sink: Mutex<Box<dyn Write + Send>>,
    lines_written: AtomicUsize,
}

impl Logger {
    fn stdout() -> Self {
        tracing::info!("Logger instance created");
        Self::with_sink(Box::new(io::stdout()))
    }

    fn with_sink(sink: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Mutex::new(sink),
            lines_written: AtomicUsize::new(0),
        }
    }

    /// Write `message` stamped with the current local time and return the
    /// line that was written (without its trailing newline).
    pub fn log(&self, message: &str) -> Result<String> {
        let line = format_line(&Local::now(), message);
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| Error::Io("logger sink mutex poisoned".into()))?;
        writeln!(sink, "{line}")?;
        sink.flush()?;
        self.lines_written.fetch_add(1, Ordering::SeqCst);
        Ok(line)
    }

    /// Number of lines written by this instance so far.
    pub fn lines_written(&self) -> usize {
        self.lines_written.load(Ordering::SeqCst)
    }

    /// Identity code of this instance.
    pub fn id(&self) -> InstanceId {
        InstanceId::of(self)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("id", &self.id())
            .field("lines_written", &self.lines_written())
            .finish()
    }
}

/// Format one log line for `message` at time `at`.
pub fn format_line<Tz>(at: &DateTime<Tz>, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!("[LOG - {}] {}", at.format(TIMESTAMP_FORMAT), message)
}

define_singleton!(Logger, Logger::stdout);
